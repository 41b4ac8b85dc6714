/// User-facing failure messages raised by cart operations.
///
/// The texts are fixed literals in the storefront's locale (pt-BR).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    OutOfStock,
    AddProductFailed,
    RemoveProductFailed,
    UpdateAmountFailed,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::OutOfStock => "Quantidade solicitada fora de estoque",
            Notification::AddProductFailed => "Erro na adição do produto",
            Notification::RemoveProductFailed => "Erro na remoção do produto",
            Notification::UpdateAmountFailed => "Erro na alteração de quantidade do produto",
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Fire-and-forget notification surface (toasts, banners, log lines).
pub trait Notifier: Send + Sync {
    fn notify_error(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_storefront_locale_for_messages() {
        assert_eq!(
            Notification::OutOfStock.message(),
            "Quantidade solicitada fora de estoque"
        );
        assert_eq!(
            Notification::AddProductFailed.message(),
            "Erro na adição do produto"
        );
        assert_eq!(
            Notification::RemoveProductFailed.message(),
            "Erro na remoção do produto"
        );
        assert_eq!(
            Notification::UpdateAmountFailed.message(),
            "Erro na alteração de quantidade do produto"
        );
    }

    #[test]
    fn should_display_message_text() {
        assert_eq!(
            format!("{}", Notification::RemoveProductFailed),
            "Erro na remoção do produto"
        );
    }
}
