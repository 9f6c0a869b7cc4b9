//! User-facing response strings.
//!
//! Every message that ends up in a response envelope resolves through this
//! catalog so deployments can re-word or translate without a rebuild. An
//! optional JSON object file pointed at by `MESSAGES_FILE` overrides the
//! built-in English defaults per key.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::{env, fs};

static DEFAULTS: &[(&str, &str)] = &[
    ("auth.required", "Authentication required"),
    ("auth.token_invalid", "Invalid or expired token"),
    ("auth.admin_only", "Admin access required"),
    ("auth.tutor_only", "Tutor access required"),
    ("auth.student_only", "Student access required"),
    ("auth.register.success", "Account registered"),
    (
        "auth.register.tutor_pending",
        "Account registered, awaiting admin approval",
    ),
    (
        "auth.register.admin_blocked",
        "Admin accounts cannot be self-registered",
    ),
    ("auth.register.taken", "Username or email already taken"),
    ("auth.login.success", "Login successful"),
    ("auth.login.invalid", "Invalid username or password"),
    ("auth.me.success", "User retrieved"),
    ("class.created", "Class submitted for approval"),
    (
        "class.tutor_unapproved",
        "Tutor account is not approved yet",
    ),
    ("class.updated", "Class updated"),
    ("class.list", "Classes retrieved"),
    ("class.retrieved", "Class retrieved"),
    ("class.not_found", "Class not found"),
    ("class.not_owner", "You do not own this class"),
    ("class.not_open", "Class is not open for enrollment"),
    ("class.enrolled", "Enrolled in class"),
    ("class.already_enrolled", "Already enrolled in this class"),
    ("meeting.not_found", "Meeting not found"),
    ("meeting.window_updated", "Attendance window updated"),
    (
        "attendance.started",
        "Attendance check-in started, please confirm",
    ),
    ("attendance.confirmed", "Attendance confirmed"),
    (
        "attendance.duplicate",
        "Attendance already started for this meeting",
    ),
    ("attendance.window_closed", "Attendance window is not open"),
    ("attendance.window_expired", "Attendance window has expired"),
    ("attendance.not_enrolled", "You are not enrolled in this class"),
    (
        "attendance.session_gone",
        "Attendance session not found or already finished",
    ),
    ("attendance.roster", "Attendance retrieved"),
    ("session.created", "Session created"),
    ("session.list", "Sessions retrieved"),
    ("session.not_found", "Session not found"),
    ("session.assigned", "Student assigned to session"),
    ("session.activated", "Session activated"),
    ("session.deactivated", "Session deactivated"),
    ("session.deleted", "Session deleted"),
    ("session.bad_action", "Unknown session action"),
    ("admin.tutor_approved", "Tutor approved"),
    ("admin.tutor_rejected", "Tutor rejected"),
    ("admin.class_approved", "Class approved"),
    ("admin.class_rejected", "Class rejected"),
    ("admin.bad_action", "Unknown action"),
    ("user.not_found", "User not found"),
    (
        "error.internal",
        "Something went wrong, please try again later",
    ),
];

static CATALOG: Lazy<HashMap<&'static str, String>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, String> = DEFAULTS
        .iter()
        .map(|(key, text)| (*key, (*text).to_string()))
        .collect();

    if let Ok(path) = env::var("MESSAGES_FILE") {
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(overrides) => {
                    for (key, text) in overrides {
                        match DEFAULTS.iter().find(|(known, _)| *known == key) {
                            Some((known, _)) => {
                                map.insert(known, text);
                            }
                            None => {
                                tracing::warn!("Unknown message key '{key}' in {path}; ignoring")
                            }
                        }
                    }
                }
                Err(e) => tracing::warn!("Failed to parse messages file {path}: {e}"),
            },
            Err(e) => tracing::warn!("Failed to read messages file {path}: {e}"),
        }
    }

    map
});

/// Resolves a catalog key to its configured text.
///
/// Unknown keys fall back to the key itself rather than panicking, so a
/// missing entry shows up in responses instead of taking the route down.
pub fn msg(key: &str) -> String {
    match CATALOG.get(key) {
        Some(text) => text.clone(),
        None => key.to_string(),
    }
}
