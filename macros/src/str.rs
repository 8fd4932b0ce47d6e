use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub struct Unpacked {
    pub mantissa: i128,
    pub scale: u32,
}

pub type ParseResult<'str> = Result<Unpacked, ParseError<'str>>;

#[derive(Debug, PartialEq)]
pub enum ParseError<'src> {
    Empty,
    ExceedsMaximumPossibleValue,
    FractionEmpty,
    LessThanMinimumPossibleValue,
    Unparseable(&'src [u8]),
}

impl Display for ParseError<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Number is empty, must have an integer part."),
            ParseError::ExceedsMaximumPossibleValue => {
                write!(f, "Number exceeds maximum value that can be represented.")
            }
            ParseError::FractionEmpty => write!(f, "Fraction empty, consider adding a `0` after the period."),
            ParseError::LessThanMinimumPossibleValue => {
                write!(f, "Number less than minimum value that can be represented.")
            }
            ParseError::Unparseable(src) => {
                write!(
                    f,
                    "Cannot parse decimal, unexpected \"{}\".",
                    String::from_utf8_lossy(src)
                )
            }
        }
    }
}

// dec!() entrypoint
pub const fn parse_dec(src: &str) -> ParseResult {
    let (is_positive, src) = parse_sign(src);

    // parse the whole part (upto optional .)
    let (whole, len, more) = parse_bytes_inner(src, Some(0));
    if len == 0 {
        return Err(ParseError::Empty);
    }

    let (num, scale) = match more {
        None => (whole, 0),
        Some([b'.', rest @ ..]) => {
            let (num, scale, more) = parse_bytes_inner(rest, whole);
            if let Some(rest) = more {
                return Err(if scale == 0 {
                    ParseError::FractionEmpty
                } else {
                    ParseError::Unparseable(rest)
                });
            }
            (num, scale)
        }
        Some(rest) => return Err(ParseError::Unparseable(rest)),
    };

    match num {
        Some(num) => Ok(Unpacked {
            mantissa: if is_positive { num } else { -num },
            scale,
        }),
        None if is_positive => Err(ParseError::ExceedsMaximumPossibleValue),
        None => Err(ParseError::LessThanMinimumPossibleValue),
    }
}

const fn parse_sign(src: &str) -> (bool, &[u8]) {
    let mut src = src.as_bytes();
    if let [b'-', signed @ ..] = src {
        src = signed;
        while let [b' ' | b'\t' | b'\n', rest @ ..] = src {
            src = rest;
        }
        (false, src)
    } else {
        (true, src)
    }
}

// Can’t use `str::parse`, as that neither groks '_', nor allows to continue after '.'.
// Returns: number parsed (`None` once it overflows), digits count, offending rest
const fn parse_bytes_inner(src: &[u8], mut num: Option<i128>) -> (Option<i128>, u32, Option<&[u8]>) {
    let mut count = 0;
    let mut next = src;
    while let [byte, rest @ ..] = next {
        if let Some(digit) = (*byte as char).to_digit(10) {
            count += 1;
            num = match num {
                Some(num) => match num.checked_mul(10) {
                    Some(shifted) => shifted.checked_add(digit as i128),
                    None => None,
                },
                None => None,
            };
        } else if *byte != b'_' || count == 0 {
            return (num, count, Some(next));
        }
        next = rest;
    }
    (num, count, None)
}
