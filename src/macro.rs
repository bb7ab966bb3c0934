macro_rules! impl_uint {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for BigUnsigned {
                fn from(input: $ty) -> BigUnsigned {
                    Self::from_integer(input as u128)
                }
            }
        )*
    };
}

macro_rules! impl_int {
    ($($ty:ty),*) => {
        $(
            impl std::convert::TryFrom<$ty> for BigUnsigned {
                type Error = Error;

                fn try_from(input: $ty) -> Result<BigUnsigned> {
                    if input < 0 {
                        return Err(InputError::NegativeBase(input as i128).into());
                    }

                    Ok(Self::from_integer(input as u128))
                }
            }
        )*
    };
}
