use async_trait::async_trait;
use common::registration::Registration;

#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn insert(&self, registration: Registration);
    async fn count(&self) -> usize;
    async fn list(&self) -> Vec<Registration>;
}
