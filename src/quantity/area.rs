quantity!(
    /// Land area under management.
    Acres, via: u32, suffix: "acres", precision: 0
);
