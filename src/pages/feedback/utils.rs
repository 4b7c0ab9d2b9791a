use leptos::*;

#[derive(Clone, Copy)]
pub struct FeedbackFormState {
    pub rating: RwSignal<u8>,
    pub comments: RwSignal<String>,
}

impl Default for FeedbackFormState {
    fn default() -> Self {
        Self {
            rating: create_rw_signal(0),
            comments: create_rw_signal(String::new()),
        }
    }
}

impl FeedbackFormState {
    pub fn reset(&self) {
        self.rating.set(0);
        self.comments.set(String::new());
    }
}

pub fn validate_feedback(rating: u8) -> Result<(), String> {
    if !(1..=5).contains(&rating) {
        return Err("Pick a rating between 1 and 5 stars".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_feedback;

    #[test]
    fn rating_must_be_one_through_five() {
        assert!(validate_feedback(0).is_err());
        assert!(validate_feedback(6).is_err());
        for rating in 1..=5 {
            assert!(validate_feedback(rating).is_ok());
        }
    }
}
