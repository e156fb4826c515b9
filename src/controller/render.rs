use super::Controller;
use crate::components::{ActivityList, activity_card, page::LOAD_FAILED};
use crate::features::activities::client;
use std::sync::atomic::Ordering;
use tracing::{debug, error};

impl Controller {
    /// Fetches the activities and rebuilds the list and the select from scratch.
    /// Returns `true` when fresh activities were put on the page.
    pub async fn render_activities(&self) -> bool {
        let seq = self.renders_started.fetch_add(1, Ordering::SeqCst) + 1;
        let result = client::fetch_activities(&self.api).await;
        let removable = self.auth.is_authenticated();

        self.view.update(|page| {
            if self.render_applied.load(Ordering::SeqCst) > seq {
                debug!("discarding stale render {seq}");
                return false;
            }
            self.render_applied.store(seq, Ordering::SeqCst);

            match result {
                Ok(book) => {
                    debug!("render {seq}: {} activities", book.len());
                    let (cards, options) = activity_card::build(&book, removable);
                    page.replace_activities(cards, options);
                    true
                }
                Err(err) => {
                    error!("Error fetching activities: {err}");
                    page.activities = ActivityList::Failed(LOAD_FAILED.to_string());
                    false
                }
            }
        })
    }
}
