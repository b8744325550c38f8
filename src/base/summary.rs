use std::collections::BTreeMap;

use crate::base;

/// Totals over a sequence of gift records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_amount: base::Won,
    pub total_count: usize,
    pub total_companions: u64,
    /// Headcount shown next to the total amount. Currently the same quantity
    /// as `total_companions`; guests themselves are not added.
    pub total_people: u64,
    /// Amount per relation. Records without a relation are left out.
    pub by_relation: BTreeMap<base::Relation, base::Won>,
    /// Amount per payment method. Records without a method are left out.
    pub by_method: BTreeMap<base::Method, base::Won>,
}

impl Summary {
    pub fn of<'r, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'r base::GiftRecord>,
    {
        let mut summary = Self::default();
        for r in records {
            summary.total_amount = summary.total_amount.saturating_add(r.amount());
            summary.total_count += 1;
            summary.total_companions += u64::from(r.companions());
            if let Some(relation) = r.relation() {
                let sum = summary.by_relation.entry(relation).or_default();
                *sum = sum.saturating_add(r.amount());
            }
            if let Some(method) = r.method() {
                let sum = summary.by_method.entry(method).or_default();
                *sum = sum.saturating_add(r.amount());
            }
        }
        summary.total_people = summary.total_companions;
        summary
    }
}
