pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidInput(InputError),
    ParseError(ParseError),
    ResourceExhaustion { digits: Option<usize> },
    Overflow,
    OutOfBounds { base: i64, exponent: i64 },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;

        match self {
            InvalidInput(e) => write!(f, "{}", e),
            ParseError(e) => write!(f, "{}", e),
            ResourceExhaustion { digits: Some(digits) } => {
                write!(f, "not enough memory for a result of {} digits", digits)
            }
            ResourceExhaustion { digits: None } => {
                write!(f, "result length does not fit into memory")
            }
            Overflow => write!(f, "value does not fit into the target integer"),
            OutOfBounds { base, exponent } => {
                write!(f, "{}^{} is outside the accepted input range", base, exponent)
            }
        }
    }
}

impl From<InputError> for Error {
    fn from(err: InputError) -> Error {
        Error::InvalidInput(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Error {
        Error::ParseError(err)
    }
}

#[derive(Debug, PartialEq)]
pub enum InputError {
    NegativeBase(i128),
    NegativeExponent(i64),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InputError::*;

        match self {
            NegativeBase(n) => write!(f, "negative value {} cannot be unsigned", n),
            NegativeExponent(n) => write!(f, "negative exponent {} is not supported", n),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ParseError {
    Empty,
    InvalidDigit(char),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ParseError::*;

        match self {
            Empty => write!(f, "cannot parse a number from an empty string"),
            InvalidDigit(c) => write!(f, "invalid decimal digit {:?}", c),
        }
    }
}

impl std::error::Error for InputError {}
impl std::error::Error for ParseError {}
impl std::error::Error for Error {}

#[cfg(test)]
mod display {
    use super::*;

    #[test]
    fn negative_base() {
        let err = Error::from(InputError::NegativeBase(-3));
        assert_eq!(err.to_string(), "negative value -3 cannot be unsigned")
    }

    #[test]
    fn negative_exponent() {
        let err = Error::from(InputError::NegativeExponent(-1));
        assert_eq!(err.to_string(), "negative exponent -1 is not supported")
    }

    #[test]
    fn parse_error() {
        let err = Error::from(ParseError::InvalidDigit('x'));
        assert_eq!(err.to_string(), "invalid decimal digit 'x'")
    }

    #[test]
    fn exhaustion() {
        let err = Error::ResourceExhaustion { digits: Some(12) };
        assert_eq!(err.to_string(), "not enough memory for a result of 12 digits")
    }
}
