use super::*;

impl Panel {
    /// Loads the list if a key survived from an earlier run.
    pub fn startup(&mut self, api: &dyn TemplateApi) {
        tracing::debug!(has_api_key = self.session.has_api_key(), "panel startup");
        if self.session.has_api_key() {
            self.load_templates(api);
        }
    }

    pub fn set_api_key(&mut self, api: &dyn TemplateApi, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.show_error("Please enter an API key");
            return;
        }
        if let Err(err) = self.session.set_api_key(value) {
            self.show_error(format!("Failed to save API key: {:#}", err));
            return;
        }
        tracing::info!("api key updated");
        self.load_templates(api);
        self.show_success("API key has been set successfully");
    }

    pub fn load_templates(&mut self, api: &dyn TemplateApi) {
        let Some(key) = self.api_key_or_report() else {
            return;
        };
        // The cards are rebuilt, so any open detail closes.
        self.expanded = None;
        match api.list_templates(&key) {
            Ok(items) if items.is_empty() => {
                self.listing = Listing::Empty;
            }
            Ok(items) => {
                tracing::debug!(count = items.len(), "templates loaded");
                self.listing = Listing::Loaded(items);
            }
            Err(err) => {
                let msg = match &err {
                    ApiError::Status { message: None, .. } => FAILED_LIST_MESSAGE.to_string(),
                    _ => err.to_string(),
                };
                self.show_error(msg);
                self.listing = Listing::Failed;
            }
        }
    }

    /// Toggles the detail panel of `id`, closing any other one first.
    pub fn view_template(&mut self, api: &dyn TemplateApi, id: TemplateId) {
        if self.is_expanded(id) {
            self.expanded = None;
            return;
        }
        self.expanded = None;

        let Some(key) = self.api_key_or_report() else {
            return;
        };
        match api.get_template(&key, id) {
            Ok(template) => {
                self.expanded = Some(template);
            }
            Err(err) => {
                self.show_error(describe(
                    &err,
                    "Failed to load template details",
                    "Error loading template details",
                ));
            }
        }
    }

    /// The single submit handler; what it does depends on the form mode.
    /// Returns true when the server accepted the request.
    pub fn submit(&mut self, api: &dyn TemplateApi) -> bool {
        match self.mode {
            FormMode::Create => self.create_template(api),
            FormMode::Update(id) => self.update_template(api, id),
        }
    }

    pub fn create_template(&mut self, api: &dyn TemplateApi) -> bool {
        if self.form.missing_required() {
            self.show_error("Name and HTML content are required");
            return false;
        }
        let Some(key) = self.api_key_or_report() else {
            return false;
        };
        let draft = self.form.draft();
        match api.create_template(&key, &draft) {
            Ok(()) => {
                self.show_success("Template created successfully");
                self.load_templates(api);
                self.form.clear();
                true
            }
            Err(err) => {
                self.show_error(describe(
                    &err,
                    "Failed to create template",
                    "Error creating template",
                ));
                false
            }
        }
    }

    /// Fills the form from the server copy of `id` and switches to update mode.
    pub fn edit_template(&mut self, api: &dyn TemplateApi, id: TemplateId) {
        let Some(key) = self.api_key_or_report() else {
            return;
        };
        match api.get_template(&key, id) {
            Ok(template) => {
                self.form.fill(&template);
                self.mode = FormMode::Update(id);
                self.focus = Focus::Form;
            }
            Err(err) => {
                self.show_error(format!("Error loading template for editing: {}", err));
            }
        }
    }

    pub fn update_template(&mut self, api: &dyn TemplateApi, id: TemplateId) -> bool {
        let Some(key) = self.api_key_or_report() else {
            return false;
        };
        let draft = self.form.draft();
        match api.update_template(&key, id, &draft) {
            Ok(()) => {
                self.show_success("Template updated successfully");
                self.load_templates(api);
                self.form.clear();
                self.mode = FormMode::Create;
                true
            }
            Err(err) => {
                self.show_error(describe(
                    &err,
                    "Failed to update template",
                    "Error updating template",
                ));
                false
            }
        }
    }

    /// Leaves update mode without sending anything.
    pub fn cancel_edit(&mut self) {
        self.form.clear();
        self.mode = FormMode::Create;
    }

    pub fn delete_template(
        &mut self,
        api: &dyn TemplateApi,
        id: TemplateId,
        confirmation: Confirmation,
    ) {
        if confirmation == Confirmation::Declined {
            tracing::debug!(%id, "delete declined");
            return;
        }
        let Some(key) = self.api_key_or_report() else {
            return;
        };
        match api.delete_template(&key, id) {
            Ok(()) => {
                self.show_success("Template deleted successfully");
                self.load_templates(api);
            }
            Err(err) => {
                self.show_error(describe(
                    &err,
                    "Failed to delete template",
                    "Error deleting template",
                ));
            }
        }
    }
}
