use hatch_types::ObjectRecord;

/// Reply of the `set*Object*` family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetReply {
    pub id: String,
}

/// Reply of the `extend*Object` family.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendReply {
    /// `_id` of the merged record.
    pub id: String,
    /// The merged record as published.
    pub value: ObjectRecord,
    /// The identifier the call resolved to. Adapters written against the
    /// platform receive it as an extra callback argument.
    pub raw_id: String,
}
