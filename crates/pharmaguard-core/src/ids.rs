use uuid::Uuid;

/// Generate an opaque patient identifier, e.g. `PATIENT_3FA2C1`.
pub fn new_patient_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("PATIENT_{}", hex[..6].to_uppercase())
}

/// Current time as `YYYY-MM-DD HH:MM:SSZ` in UTC.
pub fn response_timestamp() -> String {
    jiff::Timestamp::now()
        .strftime("%Y-%m-%d %H:%M:%SZ")
        .to_string()
}
