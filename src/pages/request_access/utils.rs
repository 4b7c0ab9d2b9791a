use leptos::*;

#[derive(Clone, Copy)]
pub struct RequestAccessFormState {
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
}

impl Default for RequestAccessFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
        }
    }
}

impl RequestAccessFormState {
    pub fn reset(&self) {
        self.username.set(String::new());
        self.email.set(String::new());
    }
}

pub fn validate_access_request(username: &str, email: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Enter a username".into());
    }
    if email.trim().is_empty() {
        return Err("Enter an email address".into());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_access_request;

    #[test]
    fn validates_username_and_email() {
        assert!(validate_access_request("", "a@b.com").is_err());
        assert!(validate_access_request("carol", "").is_err());
        assert!(validate_access_request("carol", "not-an-email").is_err());
        assert!(validate_access_request("carol", "carol@example.com").is_ok());
    }
}
