use jsonwebtoken::Algorithm;
use notevault_core::api::{self, CredentialAction};
use notevault_core::db::open_db_in_memory;
use notevault_core::{
    AccountService, NoteService, SqliteNoteRepository, SqliteUserRepository, TokenCodec,
    TokenConfig,
};
use rusqlite::Connection;

fn codec() -> TokenCodec {
    TokenCodec::new(TokenConfig::new(
        "test-secret",
        "notevault-tests",
        Algorithm::HS256,
        3600,
    ))
    .unwrap()
}

fn accounts(conn: &Connection) -> AccountService<SqliteUserRepository<'_>> {
    AccountService::new(SqliteUserRepository::new(conn), codec())
}

fn notes(conn: &Connection) -> NoteService<SqliteNoteRepository<'_>> {
    NoteService::new(SqliteNoteRepository::new(conn), codec())
}

fn credential(action: &CredentialAction) -> &str {
    match action {
        CredentialAction::Set(token) => token,
        other => panic!("expected a stored credential, got {other:?}"),
    }
}

#[test]
fn register_sets_a_credential_and_returns_201() {
    let conn = open_db_in_memory().unwrap();
    let reply = api::register(&accounts(&conn), "a@a.com", "Password-123");

    assert_eq!(reply.response.status, 201);
    assert_eq!(
        reply.response.message.as_deref(),
        Some("User successfully created")
    );
    assert!(matches!(reply.credential, CredentialAction::Set(_)));
}

#[test]
fn duplicate_register_maps_to_409() {
    let conn = open_db_in_memory().unwrap();
    api::register(&accounts(&conn), "a@a.com", "Password-123");

    let reply = api::register(&accounts(&conn), "a@a.com", "Password-123");
    assert_eq!(reply.response.status, 409);
    assert_eq!(reply.response.message.as_deref(), Some("Email already taken"));
    assert_eq!(reply.credential, CredentialAction::Keep);
}

#[test]
fn login_failures_map_to_their_statuses() {
    let conn = open_db_in_memory().unwrap();
    api::register(&accounts(&conn), "a@a.com", "Password-123");

    let reply = api::login(&accounts(&conn), "missing@a.com", "Password-123");
    assert_eq!(reply.response.status, 404);
    assert_eq!(
        reply.response.message.as_deref(),
        Some("Email does not exist")
    );

    let reply = api::login(&accounts(&conn), "a@a.com", "Password-124");
    assert_eq!(reply.response.status, 400);
    assert_eq!(reply.response.message.as_deref(), Some("Wrong password"));
    assert_eq!(reply.credential, CredentialAction::Keep);

    let reply = api::login(&accounts(&conn), "a@a.com", "Password-123");
    assert_eq!(reply.response.status, 200);
    assert_eq!(
        reply.response.message.as_deref(),
        Some("User successfully logged in")
    );
    assert!(matches!(reply.credential, CredentialAction::Set(_)));
}

#[test]
fn logout_always_clears_the_credential() {
    let reply = api::logout();
    assert_eq!(reply.response.status, 200);
    assert_eq!(
        reply.response.message.as_deref(),
        Some("User successfully logged out")
    );
    assert_eq!(reply.credential, CredentialAction::Clear);
}

#[test]
fn protected_calls_without_credential_are_401_and_clear_it() {
    let conn = open_db_in_memory().unwrap();
    let notes = notes(&conn);

    let reply = api::list_notes(&notes, None);
    assert_eq!(reply.response.status, 401);
    assert_eq!(reply.response.message.as_deref(), Some("Tokenless"));
    assert_eq!(reply.credential, CredentialAction::Clear);

    let reply = api::get_note(&notes, Some(""), 1);
    assert_eq!(reply.response.status, 401);
    assert_eq!(reply.credential, CredentialAction::Clear);
}

#[test]
fn note_lifecycle_statuses_and_envelopes() {
    let conn = open_db_in_memory().unwrap();
    let register_reply = api::register(&accounts(&conn), "a@a.com", "Password-123");
    let token = credential(&register_reply.credential).to_string();
    let notes = notes(&conn);

    let created = api::create_note(&notes, Some(&token), Some(" groceries "), Some(" milk "));
    assert_eq!(created.response.status, 201);
    assert_eq!(
        created.response.message.as_deref(),
        Some("Note successfully created")
    );
    let note = created.response.data.unwrap();
    assert_eq!(note.title, "groceries");
    assert_eq!(note.content, "milk");

    let listed = api::list_notes(&notes, Some(&token));
    assert_eq!(listed.response.status, 200);
    assert_eq!(listed.response.data.unwrap(), vec![note.clone()]);

    let updated = api::update_note(&notes, Some(&token), note.note_id, None, Some("oat milk"));
    assert_eq!(updated.response.status, 200);
    assert_eq!(
        updated.response.message.as_deref(),
        Some("Note successfully updated")
    );
    assert_eq!(updated.response.data.as_ref().unwrap().title, "groceries");
    assert_eq!(updated.response.data.as_ref().unwrap().content, "oat milk");

    let deleted = api::delete_note(&notes, Some(&token), note.note_id);
    assert_eq!(deleted.response.status, 200);
    assert_eq!(
        deleted.response.message.as_deref(),
        Some("Note successfully deleted")
    );
    assert_eq!(deleted.response.data.unwrap().content, "oat milk");

    let gone = api::get_note(&notes, Some(&token), note.note_id);
    assert_eq!(gone.response.status, 404);
    assert_eq!(gone.response.message.as_deref(), Some("Note not found"));
}

#[test]
fn blank_title_is_rejected_before_the_service_runs() {
    let conn = open_db_in_memory().unwrap();
    let register_reply = api::register(&accounts(&conn), "a@a.com", "Password-123");
    let token = credential(&register_reply.credential).to_string();
    let notes = notes(&conn);

    let reply = api::create_note(&notes, Some(&token), Some("   "), Some("body"));
    assert_eq!(reply.response.status, 400);
    assert_eq!(reply.response.message.as_deref(), Some("Title is required"));

    let note = api::create_note(&notes, Some(&token), Some("t"), Some("c"))
        .response
        .data
        .unwrap();
    let reply = api::update_note(&notes, Some(&token), note.note_id, Some(""), Some("changed"));
    assert_eq!(reply.response.status, 400);
    assert_eq!(reply.response.message.as_deref(), Some("Title is required"));

    // The stored note is unchanged after the rejected update.
    let current = api::get_note(&notes, Some(&token), note.note_id)
        .response
        .data
        .unwrap();
    assert_eq!(current.title, "t");
    assert_eq!(current.content, "c");
}

#[test]
fn foreign_note_access_maps_to_403() {
    let conn = open_db_in_memory().unwrap();
    let reply_a = api::register(&accounts(&conn), "a@a.com", "Password-123");
    let token_a = credential(&reply_a.credential).to_string();
    let reply_b = api::register(&accounts(&conn), "b@b.com", "Password-123");
    let token_b = credential(&reply_b.credential).to_string();
    let notes = notes(&conn);

    let note = api::create_note(&notes, Some(&token_a), Some("mine"), Some(""))
        .response
        .data
        .unwrap();

    let reply = api::get_note(&notes, Some(&token_b), note.note_id);
    assert_eq!(reply.response.status, 403);
    assert_eq!(
        reply.response.message.as_deref(),
        Some("You do not have access to this note")
    );
    // An authorization failure is not a credential problem.
    assert_eq!(reply.credential, CredentialAction::Keep);
}

#[test]
fn envelope_serialization_matches_the_wire_shape() {
    let conn = open_db_in_memory().unwrap();
    let register_reply = api::register(&accounts(&conn), "a@a.com", "Password-123");
    let token = credential(&register_reply.credential).to_string();
    let notes = notes(&conn);

    let created = api::create_note(&notes, Some(&token), Some("t"), Some("c"));
    let json = serde_json::to_value(&created.response).unwrap();
    assert_eq!(json["status"], 201);
    assert_eq!(json["message"], "Note successfully created");
    assert_eq!(json["data"]["title"], "t");
    assert!(json["data"]["note_id"].is_i64());
    assert!(json["data"]["author_id"].is_i64());
}
