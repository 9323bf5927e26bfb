//! Modal dialogs layered over the current screen.

use super::forms::{LoginForm, RegisterForm, TopicForm};

/// A destructive action waiting for a y/n answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTopic { id: i64, title: String },
    DeleteComment { id: i64 },
}

impl ConfirmAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteTopic { .. } => "Удалить тему?",
            ConfirmAction::DeleteComment { .. } => "Удалить комментарий?",
        }
    }

    /// Second line of the confirmation box.
    pub fn detail(&self) -> String {
        match self {
            ConfirmAction::DeleteTopic { title, .. } => {
                format!("«{}» будет удалена вместе с комментариями.", title)
            }
            ConfirmAction::DeleteComment { .. } => "Это действие нельзя отменить.".to_string(),
        }
    }
}

/// The open dialog, if any. Only one is open at a time.
#[derive(Debug, Clone)]
pub enum Dialog {
    Login(LoginForm),
    Register(RegisterForm),
    CreateTopic(TopicForm),
    Confirm(ConfirmAction),
}

impl Dialog {
    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Login(_) => "Вход в портал",
            Dialog::Register(_) => "Регистрация героя",
            Dialog::CreateTopic(_) => "Новая тема",
            Dialog::Confirm(_) => "Подтверждение",
        }
    }

    /// Whether the dialog collects text input.
    pub fn takes_text(&self) -> bool {
        !matches!(self, Dialog::Confirm(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_prompts() {
        let topic = ConfirmAction::DeleteTopic {
            id: 1,
            title: "Тест".to_string(),
        };
        assert_eq!(topic.prompt(), "Удалить тему?");
        assert!(topic.detail().contains("Тест"));
        assert_eq!(
            ConfirmAction::DeleteComment { id: 2 }.prompt(),
            "Удалить комментарий?"
        );
    }

    #[test]
    fn test_dialog_titles() {
        assert_eq!(Dialog::Login(LoginForm::new()).title(), "Вход в портал");
        assert_eq!(
            Dialog::Register(RegisterForm::new()).title(),
            "Регистрация героя"
        );
        assert!(!Dialog::Confirm(ConfirmAction::DeleteComment { id: 1 }).takes_text());
    }
}
