/// Field type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// Free text, taken verbatim
    String,
    /// Signed integer. Parsed leniently: leading digits only, anything else is 0
    Integer,
}
