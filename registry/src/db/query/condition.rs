use super::Value;

/// One element of a `where` clause: a comparison or the connective between
/// two comparisons.
#[derive(Debug)]
pub enum Kwargs {
    Condition {
        field: String,
        value: Value,
        comparison_operator: String,
    },
    LogicalOperator {
        operator: &'static str,
    },
}

pub trait Or {
    fn or(self, kwargs: Vec<Kwargs>) -> Vec<Kwargs>;
}

pub trait And {
    fn and(self, kwargs: Vec<Kwargs>) -> Vec<Kwargs>;
}

impl Or for Vec<Kwargs> {
    fn or(self, kwargs: Vec<Kwargs>) -> Vec<Kwargs> {
        chain(self, "or", kwargs)
    }
}

impl And for Vec<Kwargs> {
    fn and(self, kwargs: Vec<Kwargs>) -> Vec<Kwargs> {
        chain(self, "and", kwargs)
    }
}

fn chain(mut left: Vec<Kwargs>, operator: &'static str, right: Vec<Kwargs>) -> Vec<Kwargs> {
    if left.is_empty() {
        return right;
    }
    if !right.is_empty() {
        left.push(Kwargs::LogicalOperator { operator });
        left.extend(right);
    }
    left
}
