//! # User Messages Module
//!
//! Fixed user-facing reply strings. The classifier and the message
//! handlers pick from these; nothing here is formatted at runtime.

/// Capability description sent for /start and /help
pub const WELCOME: &str = "👋 Привет! Я бот для подсчёта калорий.\n\n\
📸 Просто отправь мне фото еды, и я оценю:\n\
• Количество калорий\n\
• Белки, жиры, углеводы\n\
• Питательную ценность\n\n\
Попробуй прямо сейчас!";

/// Reply to plain text messages
pub const SEND_PHOTO: &str = "📸 Отправьте мне фото еды, чтобы я мог посчитать калории!\n\n\
Я не могу анализировать текст - только изображения.";

/// Transient notice shown while an analysis is in flight
pub const PROCESSING: &str = "🔍 Анализирую фото...";

/// The provider withheld the analysis for content-safety reasons
pub const BLOCKED: &str = "❌ Не удалось проанализировать изображение из-за ограничений.";

/// The provider completed but returned no usable text
pub const EMPTY_RESULT: &str =
    "❌ Не удалось проанализировать изображение. Попробуйте другое фото.";

/// The provider reported rate limiting
pub const RATE_LIMITED: &str =
    "⏳ Слишком много запросов. Подождите немного и попробуйте ещё раз.";

/// The provider rejected the request itself
pub const BAD_PHOTO: &str = "❌ Не удалось обработать фото.\n\
Сделайте более чёткий снимок при хорошем освещении и попробуйте снова.";

/// Generic failure notice for download errors and unclassified provider errors
pub const ANALYSIS_ERROR: &str = "❌ Произошла ошибка при анализе фото.\n\
Пожалуйста, попробуйте:\n\
• Сделать более чёткое фото\n\
• Убедиться, что еда хорошо видна\n\
• Отправить фото в хорошем освещении";
