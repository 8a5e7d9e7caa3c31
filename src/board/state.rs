use crate::board::filter::filter_jobs;
use crate::board::model::Job;

/// Which offer-form field receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Amount,
    Description,
}

/// Payload handed to the submission thread
#[derive(Debug, Clone, PartialEq)]
pub struct OfferSubmission {
    pub job_id: i32,
    pub amount: String,
    pub description: String,
}

/// All state owned by the board view
///
/// One instance drives the whole TUI session: the fetched job list, the
/// live skill filter, the offer modal and its form fields, and the
/// fetch/submit lifecycle flags.
#[derive(Debug)]
pub struct Board {
    pub jobs: Vec<Job>,
    pub filter_skill: String,
    pub selected_job: Option<Job>,
    pub offer_amount: String,
    pub offer_description: String,
    pub loading: bool,
    pub error: Option<String>,
    pub alert: Option<String>,
    pub submitting: bool,
    pub cursor: usize,
    pub focus: FormFocus,
}

impl Board {
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            filter_skill: String::new(),
            selected_job: None,
            offer_amount: String::new(),
            offer_description: String::new(),
            loading: true,
            error: None,
            alert: None,
            submitting: false,
            cursor: 0,
            focus: FormFocus::Amount,
        }
    }

    /// Outcome of the one-shot job fetch
    ///
    /// On fault the list stays empty and a localized message renders;
    /// there is no retry.
    pub fn jobs_loaded(&mut self, result: Result<Vec<Job>, String>) {
        self.loading = false;
        match result {
            Ok(jobs) => {
                self.jobs = jobs;
                self.error = None;
            }
            Err(_) => {
                self.jobs = Vec::new();
                self.error = Some("No se pudieron cargar los trabajos".to_string());
            }
        }
    }

    pub fn modal_open(&self) -> bool {
        self.selected_job.is_some()
    }

    /// Jobs matching the current filter text
    pub fn visible_jobs(&self) -> Vec<&Job> {
        filter_jobs(&self.jobs, &self.filter_skill)
    }

    pub fn push_filter_char(&mut self, ch: char) {
        self.filter_skill.push(ch);
        self.clamp_cursor();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter_skill.pop();
        self.clamp_cursor();
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        self.cursor += 1;
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let visible = self.visible_jobs().len();
        if visible == 0 {
            self.cursor = 0;
        } else if self.cursor > visible - 1 {
            self.cursor = visible - 1;
        }
    }

    /// Open the offer modal for the job under the cursor
    pub fn open_modal(&mut self) {
        let job = self.visible_jobs().get(self.cursor).copied().cloned();
        if let Some(job) = job {
            self.selected_job = Some(job);
            self.focus = FormFocus::Amount;
        }
    }

    /// Close the modal and drop the form, however it was closed
    pub fn close_modal(&mut self) {
        self.selected_job = None;
        self.offer_amount.clear();
        self.offer_description.clear();
        self.alert = None;
        self.focus = FormFocus::Amount;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormFocus::Amount => FormFocus::Description,
            FormFocus::Description => FormFocus::Amount,
        };
    }

    /// Route one typed character to the focused form field
    ///
    /// The amount field mirrors a numeric input: only digits and a
    /// decimal point land in it. What lands there is still carried as
    /// text, never parsed.
    pub fn push_form_char(&mut self, ch: char) {
        match self.focus {
            FormFocus::Amount => {
                if ch.is_ascii_digit() || ch == '.' {
                    self.offer_amount.push(ch);
                }
            }
            FormFocus::Description => self.offer_description.push(ch),
        }
    }

    pub fn pop_form_char(&mut self) {
        match self.focus {
            FormFocus::Amount => self.offer_amount.pop(),
            FormFocus::Description => self.offer_description.pop(),
        };
    }

    /// Start a submission if both required fields are filled
    ///
    /// Returns the payload for the submission thread, or `None` when a
    /// required field is empty, no job is selected, or a submission is
    /// already in flight.
    pub fn begin_submit(&mut self) -> Option<OfferSubmission> {
        if self.submitting {
            return None;
        }
        let Some(job) = &self.selected_job else {
            return None;
        };
        if self.offer_amount.is_empty() || self.offer_description.is_empty() {
            self.alert = Some("Completa todos los campos".to_string());
            return None;
        }

        self.submitting = true;
        self.alert = None;
        Some(OfferSubmission {
            job_id: job.id,
            amount: self.offer_amount.clone(),
            description: self.offer_description.clone(),
        })
    }

    /// Outcome of the one-shot offer submission
    ///
    /// Success closes the modal and resets the form; failure keeps the
    /// modal open with the fields retained and raises an alert.
    pub fn offer_submitted(&mut self, result: Result<(), String>) {
        self.submitting = false;
        match result {
            Ok(()) => self.close_modal(),
            Err(_) => {
                self.alert = Some("No se pudo enviar la oferta. Intenta de nuevo".to_string());
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i32, skills: Option<Vec<&str>>) -> Job {
        Job {
            id,
            title: format!("job-{id}"),
            description: Some("desc".to_string()),
            cost: Some(100.0),
            skills: skills.map(|s| s.into_iter().map(String::from).collect()),
            posted_at: None,
        }
    }

    fn loaded_board() -> Board {
        let mut board = Board::new();
        board.jobs_loaded(Ok(vec![
            job(1, Some(vec!["Python", "SQL"])),
            job(2, Some(vec!["Go"])),
            job(3, None),
        ]));
        board
    }

    #[test]
    fn starts_loading_with_empty_state() {
        let board = Board::new();
        assert!(board.loading);
        assert!(board.jobs.is_empty());
        assert!(!board.modal_open());
    }

    #[test]
    fn fetch_failure_leaves_list_empty_with_message() {
        let mut board = Board::new();
        board.jobs_loaded(Err("connection refused".to_string()));

        assert!(!board.loading);
        assert!(board.jobs.is_empty());
        assert_eq!(
            board.error.as_deref(),
            Some("No se pudieron cargar los trabajos")
        );
    }

    #[test]
    fn filter_narrows_visible_jobs_as_typed() {
        let mut board = loaded_board();
        for ch in "py".chars() {
            board.push_filter_char(ch);
        }
        assert_eq!(board.visible_jobs().iter().map(|j| j.id).collect::<Vec<_>>(), vec![1]);

        board.pop_filter_char();
        board.pop_filter_char();
        assert_eq!(board.visible_jobs().len(), 2);
    }

    #[test]
    fn cursor_stays_within_the_filtered_list() {
        let mut board = loaded_board();
        board.cursor_down();
        assert_eq!(board.cursor, 1);

        for ch in "py".chars() {
            board.push_filter_char(ch);
        }
        assert_eq!(board.cursor, 0);
    }

    #[test]
    fn open_modal_selects_the_job_under_the_cursor() {
        let mut board = loaded_board();
        board.cursor_down();
        board.open_modal();
        assert_eq!(board.selected_job.as_ref().map(|j| j.id), Some(2));
    }

    #[test]
    fn closing_the_modal_always_resets_the_form() {
        let mut board = loaded_board();
        board.open_modal();
        board.offer_amount = "450".to_string();
        board.offer_description = "propuesta".to_string();

        board.close_modal();
        assert!(!board.modal_open());
        assert!(board.offer_amount.is_empty());
        assert!(board.offer_description.is_empty());

        board.open_modal();
        assert!(board.offer_amount.is_empty());
        assert!(board.offer_description.is_empty());
    }

    #[test]
    fn submit_requires_both_fields() {
        let mut board = loaded_board();
        board.open_modal();
        board.offer_amount = "450".to_string();

        assert_eq!(board.begin_submit(), None);
        assert_eq!(board.alert.as_deref(), Some("Completa todos los campos"));
        assert!(!board.submitting);
    }

    #[test]
    fn submit_carries_the_form_as_typed() {
        let mut board = loaded_board();
        board.open_modal();
        board.offer_amount = "450.50".to_string();
        board.offer_description = "Puedo empezar ya".to_string();

        let submission = board.begin_submit().unwrap();
        assert_eq!(
            submission,
            OfferSubmission {
                job_id: 1,
                amount: "450.50".to_string(),
                description: "Puedo empezar ya".to_string(),
            }
        );
        assert!(board.submitting);
        assert_eq!(board.begin_submit(), None);
    }

    #[test]
    fn successful_submit_closes_and_resets() {
        let mut board = loaded_board();
        board.open_modal();
        board.offer_amount = "450".to_string();
        board.offer_description = "propuesta".to_string();
        board.begin_submit().unwrap();

        board.offer_submitted(Ok(()));
        assert!(!board.modal_open());
        assert!(board.offer_amount.is_empty());
        assert!(board.offer_description.is_empty());
        assert!(board.alert.is_none());
    }

    #[test]
    fn failed_submit_keeps_modal_and_fields() {
        let mut board = loaded_board();
        board.open_modal();
        board.offer_amount = "450".to_string();
        board.offer_description = "propuesta".to_string();
        board.begin_submit().unwrap();

        board.offer_submitted(Err("500".to_string()));
        assert!(board.modal_open());
        assert_eq!(board.offer_amount, "450");
        assert_eq!(board.offer_description, "propuesta");
        assert!(board.alert.is_some());
        assert!(!board.submitting);
    }

    #[test]
    fn amount_field_only_accepts_numeric_characters() {
        let mut board = loaded_board();
        board.open_modal();
        for ch in "4a5.b0".chars() {
            board.push_form_char(ch);
        }
        assert_eq!(board.offer_amount, "45.0");

        board.toggle_focus();
        for ch in "hola!".chars() {
            board.push_form_char(ch);
        }
        assert_eq!(board.offer_description, "hola!");
    }
}
