use super::{ApiClient, Endpoint};
use crate::error::ApiError;
use crate::models::{
    AddResidentPayload, House, HouseDetail, HousePayload, HouseResident, PaymentHistoryEntry,
    RemoveResidentPayload,
};

pub(crate) fn list() -> Endpoint {
    Endpoint::get("/api/houses")
}

pub(crate) fn get(id: u64) -> Endpoint {
    Endpoint::get(format!("/api/houses/{}", id))
}

pub(crate) fn create() -> Endpoint {
    Endpoint::post("/api/houses")
}

pub(crate) fn update(id: u64) -> Endpoint {
    Endpoint::put(format!("/api/houses/{}", id))
}

pub(crate) fn delete(id: u64) -> Endpoint {
    Endpoint::delete(format!("/api/houses/{}", id))
}

pub(crate) fn history(id: u64) -> Endpoint {
    Endpoint::get(format!("/api/houses/{}/history", id))
}

pub(crate) fn payment_history(id: u64) -> Endpoint {
    Endpoint::get(format!("/api/houses/{}/payment-history", id))
}

pub(crate) fn add_resident(id: u64) -> Endpoint {
    Endpoint::post(format!("/api/houses/{}/add-resident", id))
}

pub(crate) fn remove_resident(id: u64) -> Endpoint {
    Endpoint::post(format!("/api/houses/{}/remove-resident", id))
}

impl ApiClient {
    pub async fn list_houses(&self) -> Result<Vec<House>, ApiError> {
        self.fetch_json(list()).await
    }

    pub async fn get_house(&self, id: u64) -> Result<HouseDetail, ApiError> {
        self.fetch_json(get(id)).await
    }

    pub async fn create_house(&self, payload: &HousePayload) -> Result<(), ApiError> {
        self.send_json(create(), payload).await
    }

    pub async fn update_house(&self, id: u64, payload: &HousePayload) -> Result<(), ApiError> {
        self.send_json(update(id), payload).await
    }

    pub async fn delete_house(&self, id: u64) -> Result<(), ApiError> {
        self.send_empty(delete(id)).await
    }

    pub async fn house_history(&self, id: u64) -> Result<Vec<HouseResident>, ApiError> {
        self.fetch_json(history(id)).await
    }

    pub async fn house_payment_history(
        &self,
        id: u64,
    ) -> Result<Vec<PaymentHistoryEntry>, ApiError> {
        self.fetch_json(payment_history(id)).await
    }

    pub async fn add_resident_to_house(
        &self,
        house_id: u64,
        payload: &AddResidentPayload,
    ) -> Result<(), ApiError> {
        self.send_json(add_resident(house_id), payload).await
    }

    pub async fn remove_resident_from_house(
        &self,
        house_id: u64,
        payload: &RemoveResidentPayload,
    ) -> Result<(), ApiError> {
        self.send_json(remove_resident(house_id), payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;

    #[test]
    fn house_actions_hang_off_the_house_path() {
        assert_eq!(history(3).path, "/api/houses/3/history");
        assert_eq!(payment_history(3).path, "/api/houses/3/payment-history");
        assert_eq!(add_resident(3).path, "/api/houses/3/add-resident");
        assert_eq!(add_resident(3).method, Method::Post);
        assert_eq!(remove_resident(3).path, "/api/houses/3/remove-resident");
    }

    #[test]
    fn house_update_uses_put() {
        assert_eq!(update(3).method, Method::Put);
        assert_eq!(delete(3).method, Method::Delete);
        assert_eq!(create().path, "/api/houses");
    }
}
