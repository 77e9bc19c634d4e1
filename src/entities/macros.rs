//! Macros for reducing boilerplate when defining records

/// Implement [`Record`](crate::core::Record) for a struct by naming its id
/// and searchable fields.
///
/// The id field type becomes `Record::Id` and must be `Clone`.
///
/// # Example
/// ```rust,ignore
/// #[derive(Clone, Debug)]
/// pub struct Single {
///     pub id: u64,
///     pub title: String,
/// }
///
/// impl_record!(Single, id: u64, name: title);
/// ```
#[macro_export]
macro_rules! impl_record {
    ($type:ident, id: $id_field:ident as $id_type:ty, name: $name_field:ident) => {
        impl $crate::core::Record for $type {
            type Id = $id_type;

            fn id(&self) -> Self::Id {
                ::std::clone::Clone::clone(&self.$id_field)
            }

            fn name(&self) -> &str {
                &self.$name_field
            }
        }
    };
    ($type:ident, id: $id_type:ty, name: $name_field:ident) => {
        $crate::impl_record!($type, id: id as $id_type, name: $name_field);
    };
}
