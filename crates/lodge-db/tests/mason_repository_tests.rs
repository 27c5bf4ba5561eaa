mod common;

use common::{create_test_pool, new_mason, test_instant};

use lodge_db::{DbError, MasonRepository};

use googletest::prelude::*;

#[tokio::test]
async fn given_new_mason_when_inserted_then_can_be_found_by_pseudonym() {
    let pool = create_test_pool().await;
    let repo = MasonRepository::new(pool);
    let joined_at = test_instant(1_700_000_000);

    let id = repo.insert(&new_mason("Hiram", joined_at)).await.unwrap();

    let result = repo.find_by_pseudonym("Hiram").await.unwrap();

    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(id));
    assert_that!(found.pseudonym, eq("Hiram"));
    assert_that!(found.token, eq("token-for-Hiram"));
    assert_that!(found.last_seen_at, eq(joined_at));
}

#[tokio::test]
async fn given_empty_roster_when_finding_unknown_pseudonym_then_returns_none() {
    let pool = create_test_pool().await;
    let repo = MasonRepository::new(pool);

    let result = repo.find_by_pseudonym("Nobody").await.unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_registered_pseudonym_when_inserted_again_then_already_registered() {
    let pool = create_test_pool().await;
    let repo = MasonRepository::new(pool);
    let joined_at = test_instant(1_700_000_000);

    repo.insert(&new_mason("Иван", joined_at)).await.unwrap();
    let result = repo.insert(&new_mason("Иван", joined_at)).await;

    assert!(matches!(
        result,
        Err(DbError::AlreadyRegistered { ref pseudonym, .. }) if pseudonym == "Иван"
    ));

    // The losing insert must not have left a second row behind.
    assert_that!(
        repo.list_pseudonyms().await.unwrap(),
        eq(&vec!["Иван".to_string()])
    );
}

#[tokio::test]
async fn given_case_differing_pseudonyms_when_inserted_then_both_are_kept() {
    // Uniqueness is a case-sensitive exact match.
    let pool = create_test_pool().await;
    let repo = MasonRepository::new(pool);
    let joined_at = test_instant(1_700_000_000);

    repo.insert(&new_mason("hiram", joined_at)).await.unwrap();
    repo.insert(&new_mason("Hiram", joined_at)).await.unwrap();

    assert_that!(repo.list_pseudonyms().await.unwrap().len(), eq(2_usize));
}

#[tokio::test]
async fn given_several_masons_when_listed_then_pseudonyms_are_in_insertion_order() {
    let pool = create_test_pool().await;
    let repo = MasonRepository::new(pool);
    let joined_at = test_instant(1_700_000_000);

    for name in ["Hiram", "Иван", "Anon"] {
        repo.insert(&new_mason(name, joined_at)).await.unwrap();
    }

    let roster = repo.list_pseudonyms().await.unwrap();

    assert_that!(
        roster,
        eq(&vec![
            "Hiram".to_string(),
            "Иван".to_string(),
            "Anon".to_string()
        ])
    );
}

#[tokio::test]
async fn given_empty_roster_when_listed_then_returns_empty_vec() {
    let pool = create_test_pool().await;
    let repo = MasonRepository::new(pool);

    let roster = repo.list_pseudonyms().await.unwrap();

    assert_that!(roster, eq(&Vec::<String>::new()));
}

#[tokio::test]
async fn given_later_timestamp_when_touched_then_last_seen_advances() {
    let pool = create_test_pool().await;
    let repo = MasonRepository::new(pool);
    let joined_at = test_instant(1_700_000_000);
    let seen_at = test_instant(1_700_000_060);

    repo.insert(&new_mason("Hiram", joined_at)).await.unwrap();
    repo.touch_last_seen("Hiram", seen_at).await.unwrap();

    let found = repo.find_by_pseudonym("Hiram").await.unwrap().unwrap();
    assert_that!(found.last_seen_at, eq(seen_at));
}

#[tokio::test]
async fn given_earlier_timestamp_when_touched_then_last_seen_does_not_move_backward() {
    let pool = create_test_pool().await;
    let repo = MasonRepository::new(pool);
    let joined_at = test_instant(1_700_000_000);

    repo.insert(&new_mason("Hiram", joined_at)).await.unwrap();
    repo.touch_last_seen("Hiram", test_instant(1_600_000_000))
        .await
        .unwrap();

    let found = repo.find_by_pseudonym("Hiram").await.unwrap().unwrap();
    assert_that!(found.last_seen_at, eq(joined_at));
}

#[tokio::test]
async fn given_unknown_pseudonym_when_touched_then_not_found() {
    let pool = create_test_pool().await;
    let repo = MasonRepository::new(pool);

    let result = repo
        .touch_last_seen("Nobody", test_instant(1_700_000_000))
        .await;

    assert!(matches!(
        result,
        Err(DbError::MasonNotFound { ref pseudonym, .. }) if pseudonym == "Nobody"
    ));
}

#[tokio::test]
async fn given_touch_when_applied_then_other_fields_are_untouched() {
    let pool = create_test_pool().await;
    let repo = MasonRepository::new(pool);
    let joined_at = test_instant(1_700_000_000);

    let id = repo.insert(&new_mason("Hiram", joined_at)).await.unwrap();
    repo.touch_last_seen("Hiram", test_instant(1_700_000_060))
        .await
        .unwrap();

    let found = repo.find_by_pseudonym("Hiram").await.unwrap().unwrap();
    assert_that!(found.id, eq(id));
    assert_that!(found.pseudonym, eq("Hiram"));
    assert_that!(found.token, eq("token-for-Hiram"));
}

#[tokio::test]
async fn given_concurrent_inserts_of_same_pseudonym_then_exactly_one_succeeds() {
    let pool = create_test_pool().await;
    let repo_a = MasonRepository::new(pool.clone());
    let repo_b = MasonRepository::new(pool);
    let joined_at = test_instant(1_700_000_000);

    let mason_a = new_mason("Hiram", joined_at);
    let mason_b = new_mason("Hiram", joined_at);
    let (a, b) = tokio::join!(
        repo_a.insert(&mason_a),
        repo_b.insert(&mason_b),
    );

    let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
    assert_that!(successes, eq(1_usize));

    let loser = if a.is_ok() { b } else { a };
    assert!(matches!(loser, Err(DbError::AlreadyRegistered { .. })));

    assert_that!(
        repo_a.list_pseudonyms().await.unwrap(),
        eq(&vec!["Hiram".to_string()])
    );
}
