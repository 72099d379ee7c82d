//! Specifications: reusable filtering/ordering/paging descriptions.

use core::marker::PhantomData;

use tracing::trace;

use crate::error::SpecError;
use crate::eval::{PropertyAccess, try_order, value_kind};
use crate::expr::PropertyPath;
use crate::predicate::Predicate;

/// A composable description of filtering, ordering, and paging over `T`,
/// decoupled from any query engine.
///
/// Criteria combine structurally via [`Specification::and`] /
/// [`Specification::or`] / [`Specification::not`]. Ordering, paging, include
/// hints, and flags are **never** merged by those combinators — callers apply
/// them to the combined specification explicitly.
///
/// `skip`/`take` are consumer-facing metadata: the specification itself does
/// not validate signs. The repository or query-translation layer consuming
/// the specification does (see [`Specification::apply`]).
#[derive(Debug)]
pub struct Specification<T> {
    criteria: Option<Predicate>,
    includes: Vec<PropertyPath>,
    include_strings: Vec<String>,
    order_by: Option<PropertyPath>,
    order_by_descending: Option<PropertyPath>,
    group_by: Option<PropertyPath>,
    skip: Option<i64>,
    take: Option<i64>,
    tracking_enabled: bool,
    split_query: bool,
    marker: PhantomData<fn(&T)>,
}

impl<T> Specification<T> {
    /// Unfiltered specification: matches everything, no ordering or paging.
    pub fn new() -> Self {
        Self {
            criteria: None,
            includes: Vec::new(),
            include_strings: Vec::new(),
            order_by: None,
            order_by_descending: None,
            group_by: None,
            skip: None,
            take: None,
            tracking_enabled: true,
            split_query: false,
            marker: PhantomData,
        }
    }

    /// Specification filtering by `criteria`.
    pub fn with_criteria(criteria: Predicate) -> Self {
        let mut spec = Self::new();
        spec.criteria = Some(criteria);
        spec
    }

    /// Add an eager-load hint as a structured path.
    pub fn including(mut self, path: impl Into<PropertyPath>) -> Self {
        self.includes.push(path.into());
        self
    }

    /// Add an eager-load hint as a raw navigation string.
    pub fn including_str(mut self, path: impl Into<String>) -> Self {
        self.include_strings.push(path.into());
        self
    }

    /// Ascending ordering key.
    pub fn ordered_by(mut self, path: impl Into<PropertyPath>) -> Self {
        self.order_by = Some(path.into());
        self
    }

    /// Descending ordering key.
    pub fn ordered_by_descending(mut self, path: impl Into<PropertyPath>) -> Self {
        self.order_by_descending = Some(path.into());
        self
    }

    /// Grouping key (consumed by the query-translation layer).
    pub fn grouped_by(mut self, path: impl Into<PropertyPath>) -> Self {
        self.group_by = Some(path.into());
        self
    }

    /// Pagination window. Values are recorded as-is; validation belongs to
    /// the consumer.
    pub fn paged(mut self, skip: i64, take: i64) -> Self {
        self.skip = Some(skip);
        self.take = Some(take);
        self
    }

    /// Disable change tracking for the query.
    pub fn without_tracking(mut self) -> Self {
        self.tracking_enabled = false;
        self
    }

    /// Ask the query engine to split the query.
    pub fn as_split_query(mut self) -> Self {
        self.split_query = true;
        self
    }

    pub fn criteria(&self) -> Option<&Predicate> {
        self.criteria.as_ref()
    }

    pub fn includes(&self) -> &[PropertyPath] {
        &self.includes
    }

    pub fn include_strings(&self) -> &[String] {
        &self.include_strings
    }

    pub fn order_by(&self) -> Option<&PropertyPath> {
        self.order_by.as_ref()
    }

    pub fn order_by_descending(&self) -> Option<&PropertyPath> {
        self.order_by_descending.as_ref()
    }

    pub fn group_by(&self) -> Option<&PropertyPath> {
        self.group_by.as_ref()
    }

    pub fn skip(&self) -> Option<i64> {
        self.skip
    }

    pub fn take(&self) -> Option<i64> {
        self.take
    }

    pub fn is_tracking_enabled(&self) -> bool {
        self.tracking_enabled
    }

    pub fn is_split_query(&self) -> bool {
        self.split_query
    }

    /// Logical AND of two specifications' criteria.
    ///
    /// Only the criteria are combined; every other part of both operands is
    /// discarded. When either side has no criteria the combined specification
    /// has none either — callers relying on one-sided combination must apply
    /// the surviving predicate themselves.
    pub fn and(&self, other: &Specification<T>) -> Specification<T> {
        let criteria = match (&self.criteria, &other.criteria) {
            (Some(left), Some(right)) => Some(left.and(right)),
            _ => None,
        };
        Self {
            criteria,
            ..Self::new()
        }
    }

    /// Logical OR of two specifications' criteria; same rules as
    /// [`Specification::and`].
    pub fn or(&self, other: &Specification<T>) -> Specification<T> {
        let criteria = match (&self.criteria, &other.criteria) {
            (Some(left), Some(right)) => Some(left.or(right)),
            _ => None,
        };
        Self {
            criteria,
            ..Self::new()
        }
    }

    /// Logical NOT of this specification's criteria. A specification without
    /// criteria stays without criteria.
    pub fn not(&self) -> Specification<T> {
        Self {
            criteria: self.criteria.as_ref().map(Predicate::negate),
            ..Self::new()
        }
    }

    /// Whether `item` satisfies the criteria. No criteria matches everything.
    pub fn is_satisfied_by(&self, item: &T) -> Result<bool, SpecError>
    where
        T: PropertyAccess,
    {
        match &self.criteria {
            Some(predicate) => predicate.evaluate(item),
            None => Ok(true),
        }
    }

    /// Apply this specification to an in-memory collection: filter, order,
    /// then page.
    ///
    /// This is the reference consumer; storage-backed repositories translate
    /// the same data into their query language instead. As a consumer it owns
    /// sign validation: negative `skip`/`take` are rejected here. Include
    /// hints, grouping, and the tracking/split flags have no in-memory
    /// meaning and are ignored.
    pub fn apply<'a>(&self, items: &'a [T]) -> Result<Vec<&'a T>, SpecError>
    where
        T: PropertyAccess,
    {
        let skip = match self.skip {
            Some(n) if n < 0 => {
                return Err(SpecError::InvalidPaging(format!(
                    "skip must be non-negative, got {n}"
                )));
            }
            Some(n) => Some(n as usize),
            None => None,
        };
        let take = match self.take {
            Some(n) if n < 0 => {
                return Err(SpecError::InvalidPaging(format!(
                    "take must be non-negative, got {n}"
                )));
            }
            Some(n) => Some(n as usize),
            None => None,
        };

        let mut selected = Vec::new();
        for item in items {
            if self.is_satisfied_by(item)? {
                selected.push(item);
            }
        }

        if let Some(path) = &self.order_by {
            selected = sorted_by_path(selected, path, false)?;
        } else if let Some(path) = &self.order_by_descending {
            selected = sorted_by_path(selected, path, true)?;
        }

        trace!(
            candidates = items.len(),
            selected = selected.len(),
            "applied specification"
        );

        let skip = skip.unwrap_or(0);
        let take = take.unwrap_or(selected.len());
        Ok(selected.into_iter().skip(skip).take(take).collect())
    }
}

impl<T> Default for Specification<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Holds no T, so cloning must not require T: Clone.
impl<T> Clone for Specification<T> {
    fn clone(&self) -> Self {
        Self {
            criteria: self.criteria.clone(),
            includes: self.includes.clone(),
            include_strings: self.include_strings.clone(),
            order_by: self.order_by.clone(),
            order_by_descending: self.order_by_descending.clone(),
            group_by: self.group_by.clone(),
            skip: self.skip,
            take: self.take,
            tracking_enabled: self.tracking_enabled,
            split_query: self.split_query,
            marker: PhantomData,
        }
    }
}

/// Stable sort by the value at `path`. All keys must be mutually orderable.
fn sorted_by_path<'a, T: PropertyAccess>(
    items: Vec<&'a T>,
    path: &PropertyPath,
    descending: bool,
) -> Result<Vec<&'a T>, SpecError> {
    let segments: Vec<&str> = path.segments().iter().map(String::as_str).collect();

    let mut keyed = Vec::with_capacity(items.len());
    for item in items {
        let key = item
            .property(&segments)
            .ok_or_else(|| SpecError::UnknownProperty(path.to_string()))?;
        keyed.push((key, item));
    }

    // Orderability is checked up front so the comparator below cannot fail.
    // Adjacent checks suffice: keys order within a kind class only.
    for pair in keyed.windows(2) {
        if try_order(&pair[0].0, &pair[1].0).is_none() {
            return Err(SpecError::TypeMismatch {
                op: "OrderBy".to_string(),
                left: value_kind(&pair[0].0),
                right: value_kind(&pair[1].0),
            });
        }
    }

    keyed.sort_by(|a, b| {
        let ordering = try_order(&a.0, &b.0).unwrap_or(core::cmp::Ordering::Equal);
        if descending { ordering.reverse() } else { ordering }
    });

    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}
