mod common;
use common::{d, fixture, today};
use ludoview::core::users::{
    UserListFilters, filter_users, has_late_loans, loans_label, subscription_overdue,
};
use ludoview::models::{Role, User};

fn ids(users: &[&User]) -> Vec<i64> {
    users.iter().map(|u| u.id).collect()
}

#[test]
fn test_default_hides_disabled_and_counts_them() {
    let snapshot = fixture();
    let view = filter_users(&snapshot.users, &UserListFilters::default());
    assert_eq!(ids(&view.visible), vec![1, 3, 7]);
    assert_eq!(view.nb_hidden, 2);
    assert_eq!(view.hidden_label(), "+2 adhérents désactivés");
}

#[test]
fn test_show_disabled_keeps_input_order() {
    let snapshot = fixture();
    let filters = UserListFilters {
        show_disabled: true,
        ..Default::default()
    };
    let view = filter_users(&snapshot.users, &filters);
    assert_eq!(ids(&view.visible), vec![1, 2, 3, 4, 7]);
    assert_eq!(view.nb_hidden, 0);
    assert_eq!(view.hidden_label(), "");
}

#[test]
fn test_hidden_count_only_among_text_matches() {
    let snapshot = fixture();
    let filters = UserListFilters {
        text: "b".into(),
        show_disabled: false,
    };
    // "Bruno Petit" and "Bernard Roux" match but are disabled.
    let view = filter_users(&snapshot.users, &filters);
    assert_eq!(ids(&view.visible), Vec::<i64>::new());
    assert_eq!(view.nb_hidden, 2);
}

#[test]
fn test_single_hidden_label() {
    let snapshot = fixture();
    let filters = UserListFilters {
        text: "bruno".into(),
        show_disabled: false,
    };
    let view = filter_users(&snapshot.users, &filters);
    assert_eq!(view.nb_hidden, 1);
    assert_eq!(view.hidden_label(), "+1 adhérent désactivé");
}

#[test]
fn test_text_matches_email_case_insensitive() {
    let snapshot = fixture();
    let filters = UserListFilters {
        text: "chloe.d@".into(),
        show_disabled: false,
    };
    let view = filter_users(&snapshot.users, &filters);
    assert_eq!(ids(&view.visible), vec![3]);
}

#[test]
fn test_text_matches_name() {
    let snapshot = fixture();
    let filters = UserListFilters {
        text: "MARTIN".into(),
        show_disabled: false,
    };
    assert_eq!(ids(&filter_users(&snapshot.users, &filters).visible), vec![1]);
}

#[test]
fn test_empty_collection() {
    let view = filter_users(&[], &UserListFilters::default());
    assert!(view.visible.is_empty());
    assert_eq!(view.nb_hidden, 0);
}

#[test]
fn test_member_markers() {
    let snapshot = fixture();
    let alice = snapshot.user(1).unwrap();
    let chloe = snapshot.user(3).unwrap();
    let gaston = snapshot.user(7).unwrap();

    assert_eq!(alice.role, Role::Admin);
    assert!(!subscription_overdue(alice, today()));
    assert!(subscription_overdue(chloe, today()));
    assert!(!subscription_overdue(gaston, today()));

    assert!(has_late_loans(alice, today()));
    assert!(!has_late_loans(alice, d("2023-05-22")));
    assert!(!has_late_loans(chloe, today()));

    assert_eq!(loans_label(alice), "2 jeux");
    assert_eq!(loans_label(chloe), "1 jeu");
    assert_eq!(loans_label(gaston), "");
}

#[test]
fn test_unknown_role_and_missing_fields() {
    let user: User =
        serde_json::from_str(r#"{"id": 9, "name": "X", "role": "superuser"}"#).unwrap();
    assert_eq!(user.role, Role::Unknown);
    assert_eq!(user.enabled, None);
    assert!(!user.is_disabled());
    assert!(user.emails.is_empty());
    assert_eq!(user.subscription, None);
}
