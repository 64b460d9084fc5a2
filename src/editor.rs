// Headless form workflows: one editor per add/edit screen, driving a
// resource and reporting every outcome through the shared message bag.

use crate::error::ApiError;
use crate::messages::{MessageBag, Severity};
use crate::record::{Record, RecordId};
use crate::resource::Resource;
use crate::routes::Route;

pub struct Editor<R: Record> {
    resource: Resource<R>,
    messages: MessageBag,
    draft: R,
    create: bool,
    exit: Route,
}

impl<R: Record> Editor<R> {
    // Blank form for a new record.
    pub fn create(resource: Resource<R>, messages: MessageBag) -> Self {
        Self {
            resource,
            messages,
            draft: R::default(),
            create: true,
            exit: Route::Home,
        }
    }

    // Form pre-filled from the stored record. A missing id surfaces as
    // NotFound rather than silently opening an empty form.
    pub async fn edit(
        resource: Resource<R>,
        messages: MessageBag,
        id: RecordId,
    ) -> Result<Self, ApiError> {
        let draft = resource.get(id).await?;
        Ok(Self {
            resource,
            messages,
            draft,
            create: false,
            exit: Route::Home,
        })
    }

    // Route taken after a successful remove.
    pub fn with_exit(mut self, exit: Route) -> Self {
        self.exit = exit;
        self
    }

    pub fn is_create(&self) -> bool {
        self.create
    }

    pub fn draft(&self) -> &R {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut R {
        &mut self.draft
    }

    // Pristine form state: empty draft, no messages.
    pub fn reset(&mut self) {
        self.draft = R::default();
        self.messages.clear();
    }

    // Create the drafted record. Success empties the form and reports
    // "<Entity> added"; failure leaves the form as typed.
    pub async fn add(&mut self) -> Result<R, ApiError> {
        self.messages.clear();
        match self.resource.save(&self.draft).await {
            Ok(stored) => {
                self.reset();
                self.messages
                    .push(Severity::Success, format!("{} added", R::entity_name()));
                Ok(stored)
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    // Store the edited record. The draft takes the returned form, so later
    // edits start from what the backend actually holds.
    pub async fn save(&mut self) -> Result<R, ApiError> {
        self.messages.clear();
        match self.resource.update(&self.draft).await {
            Ok(stored) => {
                self.draft = stored.clone();
                self.messages
                    .push(Severity::Success, format!("{} saved", R::entity_name()));
                Ok(stored)
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    // Delete the drafted record and hand back the route to leave the form
    // on.
    pub async fn remove(&mut self) -> Result<Route, ApiError> {
        self.messages.clear();
        match self.resource.delete(&self.draft).await {
            Ok(()) => {
                self.messages
                    .push(Severity::Success, format!("{} removed", R::entity_name()));
                Ok(self.exit)
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    // One danger line per error entry, the way the toolbar renders them.
    fn report(&self, err: &ApiError) {
        for message in err.messages() {
            self.messages.push(Severity::Danger, message);
        }
    }
}
