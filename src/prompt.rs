//! # Analysis Prompt Module
//!
//! The fixed instruction string sent to the vision model with every
//! photo. All provider variants share this template; it is never
//! mutated at runtime.

/// Prompt revision tag, bumped whenever the template wording changes
pub const PROMPT_VERSION: &str = "v1";

/// Instruction template for the calorie analysis request
///
/// Asks the model for dish identification, per-item calories and
/// macros, totals, and a short commentary, in a fixed reply layout.
pub const CALORIE_PROMPT: &str = "Проанализируй это изображение еды и предоставь детальную оценку калорийности.

Ответь в следующем формате:

🍽 **ЧТО НА ФОТО:**
[Перечисли все блюда и продукты, которые видишь]

📊 **КАЛОРИЙНОСТЬ ПО ПОЗИЦИЯМ:**
[Для каждого блюда укажи:
- Название и примерный размер порции
- Калории
- Белки, Жиры, Углеводы]

🔢 **ИТОГО:**
Калории: [общее число] ккал
Белки: [число] г
Жиры: [число] г
Углеводы: [число] г

💡 **КОММЕНТАРИЙ:**
[Краткий комментарий о питательности блюда]

Будь максимально точным в оценках. Если не можешь точно определить блюдо, укажи это.";
