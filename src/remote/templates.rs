//! Template CRUD against `/templates`.

use crate::model::TemplateList;

use super::*;

impl TemplateApi for RemoteClient {
    fn list_templates(&self, api_key: &str) -> ApiResult<Vec<Template>> {
        let resp = self.send(
            self.client.get(self.url("/templates")),
            api_key,
            "list templates",
        )?;
        let list: TemplateList = self.read_json(resp)?;
        Ok(list.templates)
    }

    fn get_template(&self, api_key: &str, id: TemplateId) -> ApiResult<Template> {
        let resp = self.send(
            self.client.get(self.url(&format!("/templates/{}", id))),
            api_key,
            "get template",
        )?;
        self.read_json(resp)
    }

    fn create_template(&self, api_key: &str, draft: &TemplateDraft) -> ApiResult<()> {
        // The body of a successful create is not needed; the list is reloaded.
        self.send(
            self.client.post(self.url("/templates")).json(draft),
            api_key,
            "create template",
        )?;
        Ok(())
    }

    fn update_template(
        &self,
        api_key: &str,
        id: TemplateId,
        draft: &TemplateDraft,
    ) -> ApiResult<()> {
        self.send(
            self.client
                .put(self.url(&format!("/templates/{}", id)))
                .json(draft),
            api_key,
            "update template",
        )?;
        Ok(())
    }

    fn delete_template(&self, api_key: &str, id: TemplateId) -> ApiResult<()> {
        self.send(
            self.client.delete(self.url(&format!("/templates/{}", id))),
            api_key,
            "delete template",
        )?;
        Ok(())
    }
}
