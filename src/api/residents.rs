use web_sys::{File, FormData};

use super::{ApiClient, Endpoint};
use crate::error::ApiError;
use crate::models::{Resident, ResidentPayload};

pub(crate) fn list() -> Endpoint {
    Endpoint::get("/api/residents")
}

pub(crate) fn get(id: u64) -> Endpoint {
    Endpoint::get(format!("/api/residents/{}", id))
}

pub(crate) fn create() -> Endpoint {
    Endpoint::post("/api/residents")
}

/// Multipart uploads only travel reliably over POST, so updates carry `_method=PUT`.
pub(crate) fn update(id: u64) -> Endpoint {
    Endpoint::post(format!("/api/residents/{}", id))
}

pub(crate) fn delete(id: u64) -> Endpoint {
    Endpoint::delete(format!("/api/residents/{}", id))
}

fn encode(
    payload: &ResidentPayload,
    photo: Option<&File>,
    method_override: Option<&'static str>,
) -> Result<FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{:?}", e));
    let form = FormData::new().map_err(js_err)?;
    for (key, value) in payload.form_fields(method_override) {
        form.append_with_str(key, &value).map_err(js_err)?;
    }
    if let Some(file) = photo {
        form.append_with_blob_and_filename("id_card_photo", file, &file.name())
            .map_err(js_err)?;
    }
    Ok(form)
}

impl ApiClient {
    pub async fn list_residents(&self) -> Result<Vec<Resident>, ApiError> {
        self.fetch_json(list()).await
    }

    pub async fn get_resident(&self, id: u64) -> Result<Resident, ApiError> {
        self.fetch_json(get(id)).await
    }

    pub async fn create_resident(
        &self,
        payload: &ResidentPayload,
        photo: Option<&File>,
    ) -> Result<(), ApiError> {
        let form = encode(payload, photo, None)?;
        self.send_form(create(), form).await
    }

    pub async fn update_resident(
        &self,
        id: u64,
        payload: &ResidentPayload,
        photo: Option<&File>,
    ) -> Result<(), ApiError> {
        let form = encode(payload, photo, Some("PUT"))?;
        self.send_form(update(id), form).await
    }

    pub async fn delete_resident(&self, id: u64) -> Result<(), ApiError> {
        self.send_empty(delete(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;

    #[test]
    fn resident_update_is_a_post() {
        assert_eq!(update(4).method, Method::Post);
        assert_eq!(update(4).path, "/api/residents/4");
        assert_eq!(delete(4).method, Method::Delete);
        assert_eq!(list().path, "/api/residents");
        assert_eq!(get(9).path, "/api/residents/9");
        assert_eq!(create().method, Method::Post);
    }
}
