//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes prompts for every flow step, validation errors and results.

use crate::application::state::Selection;
use crate::domain::types::LeaveKind;

// Registration
pub const ASK_TEAM: &str = "👋 Введите название команды (существующая или новая):";
pub const ASK_TEAM_SWITCH: &str = "🔄 Введите название команды для переключения:";
pub const ASK_TEAM_AGAIN: &str = "Хорошо, введите название команды снова:";
pub const REGISTER_FIRST: &str = "Введите .vacabot для регистрации или выбора команды.";
pub const MENU_NEEDS_TEAM: &str = "Сначала выберите команду. Введите название команды:";
pub const NO_ACTIVE_TEAM: &str = "Сначала зарегистрируйте или выберите команду через .vacabot.";

pub fn invalid_team_name(team: &str) -> String {
    format!("Недопустимое название команды '{team}'. Введите другое:")
}

pub fn team_joined(team: &str) -> String {
    format!("✅ Присоединились к команде '{team}'")
}

pub fn team_not_found(team: &str) -> String {
    format!("Команда '{team}' не найдена. Создать? (да/нет)")
}

pub fn team_created(team: &str) -> String {
    format!("✅ Команда '{team}' создана и выбрана")
}

// Shared prompts
pub const ASK_NAME: &str = "Введите ваше имя и фамилию:";
pub const ASK_START: &str = "Введите дату начала (ДД.ММ.ГГГГ):";
pub const ASK_END: &str = "Введите дату окончания (ДД.ММ.ГГГГ):";
pub const BAD_START: &str = "Неверный формат. Повторите дату начала:";
pub const BAD_END: &str = "Неверный формат. Повторите дату окончания:";
pub const END_BEFORE_START: &str = "Дата окончания раньше начала. Повторите дату окончания:";
pub const EMPTY_NAME: &str = "Имя не может быть пустым. Введите имя и фамилию:";
pub const INVALID_NAME: &str = "Имя должно быть одной строкой. Введите имя и фамилию:";
pub const NOT_FOUND: &str = "Не найдено.";
pub const CHOOSE_HINT: &str = "Отправьте номер записи.";
pub const BAD_CHOICE: &str = "Неверный номер. Отправьте номер записи из списка:";
pub const YES_NO: &str = "да/нет";
pub const CANCELLED: &str = "❌ Отмена";
pub const RECORD_GONE: &str = "Запись уже изменена или удалена.";
pub const RECORD_UNREADABLE: &str = "Эту запись невозможно прочитать, редактирование отменено.";
pub const STORAGE_CORRUPTED: &str =
    "⚠️ Файл команды содержит повреждённые записи, расчёт лимита невозможен.";
pub const OPERATION_FAILED: &str = "⚠️ Не удалось выполнить операцию. Попробуйте ещё раз.";

// Add
pub fn record_saved(kind: LeaveKind, days: i64) -> String {
    format!("✅ {kind} сохранён ({days} дн.)")
}

pub fn limit_exceeded(cap: i64, used: i64, requested: i64) -> String {
    format!("🚫 Лимит {cap} дн./год. Уже {used}, запрошено {requested}.")
}

// Delete
pub const ASK_DELETE_NAME: &str = "Введите ФИО для удаления:";
pub const DELETED: &str = "✅ Удалено";

pub fn confirm_delete(line: &str) -> String {
    format!("Удалить? {line}")
}

// Edit
pub const ASK_EDIT_NAME: &str = "Введите ФИО для редактирования:";
pub const ASK_NEW_START: &str = "Новая дата начала (ДД.ММ.ГГГГ):";
pub const ASK_NEW_END: &str = "Новая дата окончания (ДД.ММ.ГГГГ):";
pub const UPDATED: &str = "✅ Обновлено";

pub fn edit_limit_exceeded(cap: i64, used: i64, requested: i64) -> String {
    format!("🚫 Изменение превышает лимит {cap} дн./год. Без этой записи уже {used}, запрошено {requested}.")
}

// Search
pub const ASK_SEARCH_NAME: &str = "Введите ФИО коллеги для поиска:";

pub fn search_not_found(name: &str) -> String {
    format!("Не найдено записей для {name}.")
}

pub fn search_team_block(team: &str, lines: &[String]) -> String {
    format!("Команда {team}:\n{}", lines.join("\n"))
}

// List
pub const LIST_EMPTY: &str = "Список пуст.";

pub fn list_records(lines: &[String]) -> String {
    format!("📅 Отпуска:\n{}", lines.join("\n"))
}

/// Numbered choice list; the user answers with the number.
pub fn choose_record(options: &[Selection]) -> String {
    let mut out = String::from("Выберите запись:\n");
    for (n, option) in options.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", n + 1, option.line));
    }
    out.push_str(CHOOSE_HINT);
    out
}

pub const MENU_PROMPT: &str = "Выберите действие:";
