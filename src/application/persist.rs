use crate::domain::{DomainError, Entity, Persist};

/// Hands every record to the store, then checks each came back with an id.
///
/// Runs inside whatever transaction the caller holds; a failure part way
/// through leaves earlier records written to that transaction.
pub fn persist_all<S, E>(store: &mut S, entities: &mut [E]) -> Result<(), DomainError>
where
    S: Persist<E> + ?Sized,
    E: Entity,
{
    for entity in entities.iter_mut() {
        log::info!("Persisting: {}", entity);
        store.persist(entity)?;
    }

    for entity in entities.iter() {
        if entity.key().is_none() {
            return Err(DomainError::Internal(format!(
                "store assigned no identifier to {}",
                entity
            )));
        }
        log::info!("Persisted: {}", entity);
    }
    Ok(())
}
