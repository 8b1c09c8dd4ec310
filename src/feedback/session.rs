use serde::{Deserialize, Serialize};

/// A named, dated grouping bucket for feedback activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSession {
    pub id: String,
    pub title: String,
    /// Free-text grouping label ("Today", "Yesterday"), not a date type.
    pub date: String,
    /// Stays 0 until submissions are scoped to sessions by a persistence
    /// layer; rendered as-is in the sidebar.
    pub feedback_count: usize,
}

/// Sidebar-owned list of sessions, newest first, with an active selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionList {
    sessions: Vec<FeedbackSession>,
    active_id: Option<String>,
    next_id: u64,
}

impl Default for SessionList {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionList {
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            active_id: None,
            next_id: 1,
        }
    }

    /// Initial sidebar state: one "Current Session" entry, selected.
    pub fn with_current_session() -> Self {
        let mut list = Self::new();
        let id = list.push_session("Current Session");
        list.active_id = Some(id);
        list
    }

    /// Prepend a fresh "New Session" entry and make it active.
    pub fn new_session(&mut self) -> &FeedbackSession {
        let id = self.push_session("New Session");
        self.active_id = Some(id);
        &self.sessions[0]
    }

    /// Mark a session as active. Unconditional: a stale id that no longer
    /// matches any session simply leaves nothing highlighted.
    pub fn select(&mut self, id: impl Into<String>) {
        self.active_id = Some(id.into());
    }

    /// Remove every session and drop the selection.
    pub fn delete_all(&mut self) {
        self.sessions.clear();
        self.active_id = None;
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }

    /// Sessions whose title contains the query, case-insensitively.
    pub fn filtered(&self, query: &str) -> Vec<&FeedbackSession> {
        let query = query.to_lowercase();
        self.sessions
            .iter()
            .filter(|s| s.title.to_lowercase().contains(&query))
            .collect()
    }

    pub fn sessions(&self) -> &[FeedbackSession] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn push_session(&mut self, title: &str) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        self.sessions.insert(
            0,
            FeedbackSession {
                id: id.clone(),
                title: title.to_string(),
                date: "Today".to_string(),
                feedback_count: 0,
            },
        );
        id
    }
}

/// Partition sessions by date label, labels ordered by first occurrence in
/// the input and sessions keeping their relative order inside each bucket.
pub fn group_by_date<'a>(
    sessions: &[&'a FeedbackSession],
) -> Vec<(String, Vec<&'a FeedbackSession>)> {
    let mut groups: Vec<(String, Vec<&FeedbackSession>)> = Vec::new();
    for &session in sessions {
        match groups.iter_mut().find(|(date, _)| *date == session.date) {
            Some((_, bucket)) => bucket.push(session),
            None => groups.push((session.date.clone(), vec![session])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: &str, title: &str, date: &str) -> FeedbackSession {
        FeedbackSession {
            id: id.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            feedback_count: 0,
        }
    }

    #[test]
    fn test_initial_state() {
        let list = SessionList::with_current_session();
        assert_eq!(list.len(), 1);
        assert_eq!(list.sessions()[0].title, "Current Session");
        assert_eq!(list.sessions()[0].date, "Today");
        assert!(list.is_active(&list.sessions()[0].id));
    }

    #[test]
    fn test_new_session_prepends_and_selects() {
        let mut list = SessionList::with_current_session();
        let new_id = list.new_session().id.clone();

        assert_eq!(list.len(), 2);
        assert_eq!(list.sessions()[0].id, new_id);
        assert_eq!(list.sessions()[0].title, "New Session");
        assert!(list.is_active(&new_id));
        assert!(!list.is_active(&list.sessions()[1].id));
    }

    #[test]
    fn test_select_unknown_id_highlights_nothing() {
        let mut list = SessionList::with_current_session();
        list.select("does-not-exist");

        assert!(list.sessions().iter().all(|s| !list.is_active(&s.id)));
    }

    #[test]
    fn test_delete_all_clears_selection() {
        let mut list = SessionList::with_current_session();
        list.new_session();
        list.delete_all();

        assert!(list.is_empty());
        assert!(!list.is_active("1"));

        // A new session after the wipe starts a fresh selection.
        let id = list.new_session().id.clone();
        assert!(list.is_active(&id));
    }

    #[test]
    fn test_filtered_matches_case_insensitively() {
        let mut list = SessionList::with_current_session();
        list.new_session();

        assert_eq!(list.filtered("").len(), 2);
        assert_eq!(list.filtered("CURRENT").len(), 1);
        assert_eq!(list.filtered("new").len(), 1);
        assert!(list.filtered("nothing matches this").is_empty());
    }

    #[test]
    fn test_group_by_date_first_seen_order() {
        let a = session("1", "A", "Today");
        let b = session("2", "B", "Today");
        let c = session("3", "C", "Yesterday");
        let groups = group_by_date(&[&a, &b, &c]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Today");
        assert_eq!(groups[1].0, "Yesterday");
        // Today's bucket keeps input order.
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[0].id, "1");
        assert_eq!(groups[0].1[1].id, "2");
    }

    #[test]
    fn test_group_by_date_interleaved_labels() {
        let a = session("1", "A", "Yesterday");
        let b = session("2", "B", "Today");
        let c = session("3", "C", "Yesterday");
        let groups = group_by_date(&[&a, &b, &c]);

        // Label order is first occurrence, not chronological.
        assert_eq!(groups[0].0, "Yesterday");
        assert_eq!(groups[1].0, "Today");
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_group_by_date_empty() {
        assert!(group_by_date(&[]).is_empty());
    }
}
