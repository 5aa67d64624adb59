//! Read-only member summary supplied by the member directory.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::MemberId;

/// Identity of a member as the ledger sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id: MemberId,
    pub name: String,
    pub email: String,
}

impl MemberSummary {
    pub fn new(id: MemberId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Mailbox string in `Name <email>` form.
    pub fn mailbox(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailbox_combines_name_and_email() {
        let member = MemberSummary::new(MemberId::new(7).unwrap(), "Ana Lima", "ana@example.com");
        assert_eq!(member.mailbox(), "Ana Lima <ana@example.com>");
    }
}
