use super::PageHeader;

pub const HEADER: PageHeader = PageHeader {
    title: "Правила портала",
    subtitle: "Соблюдайте эти правила для комфортной игры всех участников",
};

#[derive(Debug, Clone, Copy)]
pub struct RuleSection {
    pub title: &'static str,
    pub items: [&'static str; 3],
}

pub const SECTIONS: [RuleSection; 4] = [
    RuleSection {
        title: "Уважение к игрокам",
        items: [
            "Относитесь к другим участникам с уважением",
            "Не используйте оскорбления и грубые выражения",
            "Уважайте мнение и стиль игры других",
        ],
    },
    RuleSection {
        title: "Качество ролевой игры",
        items: [
            "Пишите посты минимум из 3-5 предложений",
            "Следите за грамотностью и пунктуацией",
            "Описывайте действия и мысли персонажа",
        ],
    },
    RuleSection {
        title: "Игровой процесс",
        items: [
            "Не контролируйте чужих персонажей без разрешения",
            "Следуйте логике мира и своего персонажа",
            "Согласовывайте значимые события с мастером",
        ],
    },
    RuleSection {
        title: "Запрещенный контент",
        items: [
            "Запрещена пропаганда насилия и дискриминации",
            "Не публикуйте контент 18+ в открытых темах",
            "Не размещайте чужие материалы без разрешения",
        ],
    },
];

pub const PENALTIES_TITLE: &str = "Нарушения и наказания";

/// One step of the penalty ladder, mildest first.
#[derive(Debug, Clone, Copy)]
pub struct Penalty {
    pub name: &'static str,
    pub description: &'static str,
}

pub const PENALTIES: [Penalty; 3] = [
    Penalty {
        name: "Предупреждение",
        description: "За первое нарушение правил — устное предупреждение",
    },
    Penalty {
        name: "Временный бан",
        description: "При повторных нарушениях — блокировка на 3-7 дней",
    },
    Penalty {
        name: "Перманентный бан",
        description: "За грубые нарушения — постоянная блокировка аккаунта",
    },
];
