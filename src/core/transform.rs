use crate::core::models::application::{AgeInput, Application, ApplicationInsert, ApplicationRow, ApplicationStatus, Submission};
use crate::error::Error;

pub const MIN_AGE: i32 = 16;
pub const MAX_AGE: i32 = 100;

pub fn to_storage(application: Application) -> ApplicationRow {
    ApplicationRow {
        id: application.id,
        first_name: application.first_name,
        last_name: application.last_name,
        email: application.email,
        phone: application.phone,
        age: application.age,
        education: application.education,
        experience: application.experience,
        motivation: application.motivation,
        skills: application.skills,
        availability: application.availability,
        address: application.address,
        emergency_contact: application.emergency_contact,
        emergency_phone: application.emergency_phone,
        type_: application.type_,
        status: application.status,
        created_at: application.created_at,
        updated_at: application.updated_at,
    }
}

pub fn to_presentation(row: ApplicationRow) -> Application {
    Application {
        id: row.id,
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
        phone: row.phone,
        age: row.age,
        education: row.education,
        experience: row.experience,
        motivation: row.motivation,
        skills: row.skills,
        availability: row.availability,
        address: row.address,
        emergency_contact: row.emergency_contact,
        emergency_phone: row.emergency_phone,
        type_: row.type_,
        status: row.status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

/// Validates a registration submission and renames it into a new storage row.
///
/// Status falls back to pending when the submission has none.
pub fn submission_to_storage(submission: Submission) -> Result<ApplicationInsert, Error> {
    let age = match &submission.age {
        Some(age) => coerce_age(age)?,
        None => return Err(Error::Validation("age is required".into())),
    };
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(Error::Validation(format!("age must be between {MIN_AGE} and {MAX_AGE} (got {age})")));
    }
    let status = match submission.status.as_deref() {
        None | Some("") => ApplicationStatus::Pending,
        Some(status) => status.parse()?,
    };
    let email = required("email", submission.email)?;
    if !email.contains('@') {
        return Err(Error::Validation(format!("email is not a valid address (got {email:?})")));
    }
    Ok(ApplicationInsert {
        first_name: required("firstName", submission.first_name)?,
        last_name: required("lastName", submission.last_name)?,
        email,
        phone: required("phone", submission.phone)?,
        age,
        education: submission.education.trim().parse()?,
        experience: submission.experience,
        motivation: submission.motivation,
        skills: submission.skills,
        availability: submission.availability,
        address: required("address", submission.address)?,
        emergency_contact: required("emergencyContact", submission.emergency_contact)?,
        emergency_phone: required("emergencyPhone", submission.emergency_phone)?,
        type_: submission.type_.trim().parse()?,
        status,
    })
}

pub fn coerce_age(age: &AgeInput) -> Result<i32, Error> {
    match age {
        AgeInput::Number(n) => i32::try_from(*n).map_err(|_| Error::Validation(format!("age is out of range (got {n})"))),
        AgeInput::Text(s) => s.trim().parse().map_err(|_| Error::Validation(format!("age must be a number (got {s:?})"))),
    }
}

fn required(field: &str, value: String) -> Result<String, Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{field} is required")));
    }
    Ok(value)
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::core::models::application::{ApplicationId, ApplicationType, Education, StoredEducation};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    pub(crate) fn submission(type_: &str) -> Submission {
        Submission {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            age: Some(AgeInput::Text("25".into())),
            education: "graduate".into(),
            experience: "analytical engines".into(),
            motivation: "curiosity".into(),
            skills: "mathematics".into(),
            availability: "weekends".into(),
            address: "12 St James's Square".into(),
            emergency_contact: "Mary Somerville".into(),
            emergency_phone: "555-0199".into(),
            type_: type_.into(),
            status: None,
        }
    }

    fn application() -> Application {
        Application {
            id: ApplicationId(7),
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            email: Some("ada@example.com".into()),
            phone: Some("555-0100".into()),
            age: Some(25),
            education: Some(Education::PostGraduate.into()),
            experience: None,
            motivation: Some("curiosity".into()),
            skills: Some(String::new()),
            availability: None,
            address: Some("12 St James's Square".into()),
            emergency_contact: Some("Mary Somerville".into()),
            emergency_phone: Some("555-0199".into()),
            type_: ApplicationType::Intern,
            status: ApplicationStatus::Approved,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_round_trip() {
        let app = application();
        assert_eq!(to_presentation(to_storage(app.clone())), app);
    }

    #[test]
    fn test_field_names() {
        let presentation = serde_json::to_value(application()).unwrap();
        assert_eq!(presentation["firstName"], json!("Ada"));
        assert_eq!(presentation["emergencyContact"], json!("Mary Somerville"));
        assert_eq!(presentation["education"], json!("post-graduate"));
        assert_eq!(presentation["type"], json!("intern"));
        assert!(presentation["created_at"].is_string());
        assert!(presentation["updated_at"].is_null());
        assert!(presentation["experience"].is_null());

        let storage = serde_json::to_value(to_storage(application())).unwrap();
        assert_eq!(storage["first_name"], json!("Ada"));
        assert_eq!(storage["emergency_phone"], json!("555-0199"));
        assert_eq!(storage["status"], json!("approved"));
        assert!(storage.get("firstName").is_none());
    }

    #[test]
    fn test_missing_storage_fields_stay_null() {
        let row: ApplicationRow = serde_json::from_value(json!({
            "id": 3,
            "first_name": "Grace",
            "type": "volunteer",
            "status": "pending",
            "created_at": "2024-05-01T10:00:00+00:00"
        }))
        .unwrap();
        let app = to_presentation(row);
        assert_eq!(app.first_name.as_deref(), Some("Grace"));
        assert_eq!(app.last_name, None);
        assert_eq!(app.age, None);
        assert_eq!(app.updated_at, None);
    }

    #[test]
    fn test_unrecognized_education_is_kept() {
        let row: ApplicationRow = serde_json::from_value(json!({
            "id": 4,
            "education": "",
            "type": "intern",
            "status": "pending",
            "created_at": "2024-05-01T10:00:00+00:00"
        }))
        .unwrap();
        assert_eq!(row.education, Some(StoredEducation::Unrecognized(String::new())));
        let app = to_presentation(row);
        assert_eq!(serde_json::to_value(&app).unwrap()["education"], json!(""));

        let row: ApplicationRow = serde_json::from_value(json!({
            "id": 5,
            "education": "phd",
            "type": "volunteer",
            "status": "approved",
            "created_at": "2024-05-01T10:00:00+00:00"
        }))
        .unwrap();
        assert_eq!(to_presentation(row).education.as_ref().map(StoredEducation::as_str), Some("phd"));
        assert_eq!(StoredEducation::from("graduate".to_owned()), StoredEducation::Known(Education::Graduate));
    }

    #[test]
    fn test_submission_defaults_to_pending() {
        let insert = submission_to_storage(submission("intern")).unwrap();
        assert_eq!(insert.age, 25);
        assert_eq!(insert.status, ApplicationStatus::Pending);
        assert_eq!(insert.type_, ApplicationType::Intern);
        assert_eq!(insert.education, Education::Graduate);
    }

    #[test]
    fn test_submission_keeps_explicit_status() {
        let mut s = submission("volunteer");
        s.status = Some("approved".into());
        assert_eq!(submission_to_storage(s).unwrap().status, ApplicationStatus::Approved);
    }

    #[test]
    fn test_age_coercion() {
        assert_eq!(coerce_age(&AgeInput::Number(20)).unwrap(), 20);
        assert_eq!(coerce_age(&AgeInput::Text(" 42 ".into())).unwrap(), 42);
        assert!(matches!(coerce_age(&AgeInput::Text("twenty".into())), Err(Error::Validation(_))));
        assert!(matches!(coerce_age(&AgeInput::Number(i64::MAX)), Err(Error::Validation(_))));
    }

    #[test]
    fn test_submission_rejections() {
        let mut s = submission("intern");
        s.age = Some(AgeInput::Number(15));
        assert!(matches!(submission_to_storage(s), Err(Error::Validation(_))));

        let mut s = submission("intern");
        s.age = None;
        assert!(matches!(submission_to_storage(s), Err(Error::Validation(_))));

        let mut s = submission("intern");
        s.first_name = "   ".into();
        match submission_to_storage(s) {
            Err(Error::Validation(msg)) => assert_eq!(msg, "firstName is required"),
            other => panic!("unexpected {other:?}"),
        }

        let mut s = submission("intern");
        s.email = "not-an-address".into();
        assert!(matches!(submission_to_storage(s), Err(Error::Validation(_))));

        let mut s = submission("intern");
        s.education = "".into();
        assert!(matches!(submission_to_storage(s), Err(Error::Validation(_))));

        let mut s = submission("intern");
        s.status = Some("archived".into());
        assert!(matches!(submission_to_storage(s), Err(Error::Validation(_))));

        assert!(matches!(submission_to_storage(submission("staff")), Err(Error::Validation(_))));
    }

    #[test]
    fn test_submission_from_form_json() {
        let s: Submission = serde_json::from_value(json!({
            "firstName": "A",
            "lastName": "B",
            "email": "a@b.com",
            "phone": "123",
            "age": "20",
            "education": "other",
            "address": "x",
            "emergencyContact": "C",
            "emergencyPhone": "456",
            "type": "volunteer",
            "id": 99,
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        let insert = submission_to_storage(s).unwrap();
        assert_eq!(insert.age, 20);
        assert_eq!(insert.type_, ApplicationType::Volunteer);
        assert_eq!(insert.status, ApplicationStatus::Pending);
        assert_eq!(insert.experience, "");
    }
}
