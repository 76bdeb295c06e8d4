use cinema_domain::cast::CastType;

use crate::domain::repository::PersonRepository;
use crate::domain::types::PersonDetail;
use crate::error::CatalogServiceError;

// ── GetPersonDetail ──────────────────────────────────────────────────────────

pub struct GetPersonDetailUseCase<P: PersonRepository> {
    pub persons: P,
}

impl<P: PersonRepository> GetPersonDetailUseCase<P> {
    pub async fn execute(&self, person_id: i32) -> Result<PersonDetail, CatalogServiceError> {
        let person = self
            .persons
            .find(person_id)
            .await?
            .ok_or(CatalogServiceError::PersonNotFound)?;
        let job_types = self.persons.job_types(person_id).await?;
        let as_director = self.persons.films(person_id, CastType::Director).await?;
        let as_actor = self.persons.films(person_id, CastType::Actor).await?;
        Ok(PersonDetail {
            person,
            job_types,
            as_director,
            as_actor,
        })
    }
}
