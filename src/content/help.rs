use super::PageHeader;

pub const HEADER: PageHeader = PageHeader {
    title: "Помощь",
    subtitle: "Найдите ответы на свои вопросы или свяжитесь с поддержкой",
};

#[derive(Debug, Clone, Copy)]
pub struct Guide {
    pub title: &'static str,
    pub description: &'static str,
}

pub const GUIDES: [Guide; 4] = [
    Guide {
        title: "Гайд для новичков",
        description: "Первые шаги в мире ролевых игр",
    },
    Guide {
        title: "Создание персонажа",
        description: "Как придумать интересного героя",
    },
    Guide {
        title: "Писательское мастерство",
        description: "Советы по написанию постов",
    },
    Guide {
        title: "Игровые миры",
        description: "Обзор доступных вселенных",
    },
];

pub const FAQ_TITLE: &str = "Часто задаваемые вопросы";

#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 6] = [
    FaqEntry {
        question: "Как начать играть?",
        answer: "Зарегистрируйтесь, создайте персонажа и выберите интересующий вас мир. Прочитайте описание мира и найдите открытую тему для вступления или создайте свою.",
    },
    FaqEntry {
        question: "Что такое РП (ролевая игра)?",
        answer: "Ролевая игра — это совместное творчество, где вы описываете действия и мысли своего персонажа в вымышленном мире. Каждый игрок управляет своим героем и взаимодействует с другими.",
    },
    FaqEntry {
        question: "Как создать своего персонажа?",
        answer: "Перейдите в раздел выбранного мира и создайте анкету персонажа. Опишите его внешность, характер, историю и способности. Дождитесь одобрения администрации.",
    },
    FaqEntry {
        question: "Можно ли играть за нескольких персонажей?",
        answer: "Да, вы можете создать несколько персонажей в разных мирах или в одном мире, если правила это позволяют.",
    },
    FaqEntry {
        question: "Что делать, если возник конфликт с игроком?",
        answer: "Попробуйте решить конфликт в личных сообщениях. Если это не помогло, обратитесь к модератору или администратору мира.",
    },
    FaqEntry {
        question: "Как стать мастером игры?",
        answer: "Наберитесь опыта как игрок, затем подайте заявку на создание своего мира. Администрация рассмотрит вашу заявку и поможет с запуском.",
    },
];

pub const SUPPORT_TITLE: &str = "Нужна дополнительная помощь?";
pub const SUPPORT_TEXT: &str = "Не нашли ответ на свой вопрос? Наша команда поддержки готова помочь!";
pub const SUPPORT_ACTIONS: [&str; 2] = ["Написать в поддержку", "Открыть чат"];

/// Accordion over [`FAQ`] with at most one entry open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    cursor: usize,
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1).min(FAQ.len() - 1);
    }

    pub fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Open the entry under the cursor, closing any other; close it if it
    /// was already open.
    pub fn toggle(&mut self) {
        self.open = if self.open == Some(self.cursor) {
            None
        } else {
            Some(self.cursor)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_single_open_entry() {
        let mut accordion = FaqAccordion::default();
        accordion.toggle();
        assert_eq!(accordion.open(), Some(0));

        accordion.next();
        accordion.toggle();
        assert_eq!(accordion.open(), Some(1));

        accordion.toggle();
        assert_eq!(accordion.open(), None);
    }

    #[test]
    fn test_accordion_cursor_bounds() {
        let mut accordion = FaqAccordion::default();
        accordion.prev();
        assert_eq!(accordion.cursor(), 0);
        for _ in 0..10 {
            accordion.next();
        }
        assert_eq!(accordion.cursor(), FAQ.len() - 1);
    }
}
