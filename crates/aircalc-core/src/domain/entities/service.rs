use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::{
    error::DomainError,
    value_objects::{ServiceId, Unit},
};

/// A priced installation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    /// Display name. Also the only input to categorization.
    pub name: String,
    /// Unit price, currency agnostic.
    pub price: Decimal,
    pub unit: Unit,
}

impl Service {
    /// Build a service. The id is checked when the service joins a `Catalog`.
    pub fn new(id: u32, name: impl Into<String>, price: Decimal, unit: Unit) -> Self {
        Self {
            id: ServiceId(id),
            name: name.into(),
            price,
            unit,
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.get() == 0 {
            return Err(DomainError::InvalidServiceId(0));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidService {
                id: self.id.get(),
                reason: "name is empty".into(),
            });
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(DomainError::InvalidService {
                id: self.id.get(),
                reason: format!("price {} is negative", self.price),
            });
        }
        Ok(())
    }
}

/// Ordered, read-only list of services.
///
/// Invariant: ids are positive and unique, prices are non-negative, names are
/// non-empty. Enforced at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    pub fn new(services: Vec<Service>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(services.len());
        for service in &services {
            service.validate()?;
            if !seen.insert(service.id) {
                return Err(DomainError::DuplicateServiceId {
                    id: service.id.get(),
                });
            }
        }
        Ok(Self { services })
    }

    pub fn find(&self, id: ServiceId) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn contains(&self, id: ServiceId) -> bool {
        self.find(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Service;
    type IntoIter = std::slice::Iter<'a, Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}
