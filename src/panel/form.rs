use crate::model::{Template, TemplateDraft, TemplateId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(TemplateId),
}

impl FormMode {
    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Create => "Create Template",
            FormMode::Update(_) => "Update Template",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Description,
    HtmlContent,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::HtmlContent,
            FormField::HtmlContent => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::HtmlContent,
            FormField::Description => FormField::Name,
            FormField::HtmlContent => FormField::Description,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::HtmlContent => "HTML Content",
        }
    }

    pub fn multiline(self) -> bool {
        self == FormField::HtmlContent
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateForm {
    pub name: String,
    pub description: String,
    pub html_content: String,
    pub field: FormField,
}

impl TemplateForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::HtmlContent => &self.html_content,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::HtmlContent => &mut self.html_content,
        }
    }

    pub fn active_mut(&mut self) -> &mut String {
        self.value_mut(self.field)
    }

    pub fn draft(&self) -> TemplateDraft {
        TemplateDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            html_content: self.html_content.clone(),
        }
    }

    pub fn fill(&mut self, template: &Template) {
        let draft = TemplateDraft::from(template);
        self.name = draft.name;
        self.description = draft.description;
        self.html_content = draft.html_content;
        self.field = FormField::Name;
    }

    pub fn clear(&mut self) {
        *self = TemplateForm::default();
    }

    /// Name and HTML content must both be non-empty. Whitespace counts as
    /// content; the server decides whether it is acceptable.
    pub fn missing_required(&self) -> bool {
        self.name.is_empty() || self.html_content.is_empty()
    }
}
