//! # Help Text
//!
//! Help messages shown with the main menu and by the help button.

pub const INTRO: &str = concat!(
    "Я бот для учёта отпусков и других видов отсутствий.\n",
    "➕ Отпуск — добавить отпуск (лимит 28 дней/год);\n",
    "➕ Отгулы — добавить отгулы (без ограничений);\n",
    "➕ ОЗС — добавить отпуск за свой счёт (без ограничений);\n",
    "➕ Командировка — добавить командировку (без ограничений);\n",
    "📅 Отпуска — просмотреть все записи;\n",
    "✏️ Редактировать — изменить существующую запись;\n",
    "❌ Удалить — удалить запись;\n",
    "ℹ️ Помощь — показать этот список команд;\n",
    "🔄 Сменить команду — переключиться между командами;\n",
    "🔍 Поиск — глобальный поиск по имени коллеги."
);

pub const COMMANDS: &str = concat!(
    "ℹ️ Команды:\n",
    "➕ Отпуск/Отгулы/ОЗС/Командировка — добавить запись\n",
    "📅 Отпуска — список по дате\n",
    "✏️ Редактировать — изменить запись\n",
    "❌ Удалить — удалить запись\n",
    "🔄 Сменить команду — переключиться\n",
    "🔍 Поиск — глобальный поиск по имени\n",
    ".vacabot — регистрация или главное меню\n",
    ".cancel — прервать текущий диалог"
);
