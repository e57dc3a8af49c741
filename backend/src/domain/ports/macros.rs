//! Defines helper macros for generating domain port error enums.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructors generated for the profile store error.
    use rstest::rstest;

    use crate::domain::ports::StoreError;

    #[rstest]
    fn timeout_constructor_accepts_str() {
        let err = StoreError::timeout("deadline elapsed");
        assert!(matches!(&err, StoreError::Timeout { message } if message == "deadline elapsed"));
        assert_eq!(err.to_string(), "store request timed out: deadline elapsed");
    }

    #[rstest]
    fn decode_constructor_accepts_owned_strings() {
        let err = StoreError::decode(String::from("expected array"));
        assert_eq!(err.message(), "expected array");
        assert_eq!(
            err.to_string(),
            "store response could not be decoded: expected array"
        );
    }

    #[rstest]
    fn rejected_constructor_keeps_status_and_text() {
        let err = StoreError::rejected(409_u16, "duplicate key value");
        assert!(matches!(
            &err,
            StoreError::Rejected { status: 409, message } if message == "duplicate key value"
        ));
    }
}
