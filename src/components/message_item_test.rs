use super::*;
use crate::state::chat::Role;

#[test]
fn avatar_label_distinguishes_roles() {
    assert_eq!(avatar_label(Role::User), "YOU");
    assert_eq!(avatar_label(Role::Assistant), "AI");
}
