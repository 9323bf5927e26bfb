use super::PageHeader;

pub const HEADER: PageHeader = PageHeader {
    title: "Новости портала",
    subtitle: "Следите за обновлениями, событиями и новыми возможностями",
};

#[derive(Debug, Clone, Copy)]
pub struct NewsItem {
    pub title: &'static str,
    pub date: &'static str,
    pub tag: &'static str,
    pub body: &'static str,
}

pub const ITEMS: [NewsItem; 5] = [
    NewsItem {
        title: "Открытие нового мира: Звездные войны",
        date: "28 октября 2025",
        tag: "Новые миры",
        body: "Рады объявить об открытии долгожданного мира по вселенной Звездных войн! Играйте за джедаев, ситхов или простых контрабандистов в далекой-далекой галактике.",
    },
    NewsItem {
        title: "Обновление системы персонажей",
        date: "25 октября 2025",
        tag: "Обновления",
        body: "Добавлена возможность создавать расширенные анкеты с фотогалереей и детальной историей персонажа. Теперь вы можете добавлять до 10 изображений!",
    },
    NewsItem {
        title: "Конкурс на лучшую историю месяца",
        date: "20 октября 2025",
        tag: "События",
        body: "Участвуйте в конкурсе и выиграйте премиум-статус на 3 месяца! Присылайте свои лучшие посты до конца месяца. Победителей выберет жюри из опытных игроков.",
    },
    NewsItem {
        title: "Новые возможности для мастеров",
        date: "15 октября 2025",
        tag: "Функционал",
        body: "Мастера игр теперь могут создавать системные сообщения, использовать кастомные карты мира и управлять таймлайном событий.",
    },
    NewsItem {
        title: "Исправление ошибок и улучшения",
        date: "10 октября 2025",
        tag: "Патчи",
        body: "Исправлена проблема с уведомлениями, улучшена производительность при загрузке тем, добавлена темная тема для мобильных устройств.",
    },
];

pub const SUBSCRIBE_TITLE: &str = "Подписка на новости";
pub const SUBSCRIBE_TEXT: &str =
    "Будьте в курсе всех обновлений! Включите уведомления в настройках профиля.";
pub const SUBSCRIBE_CHANNELS: [&str; 3] =
    ["Email рассылка", "Push-уведомления", "В личных сообщениях"];
