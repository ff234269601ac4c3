use super::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MaxCommentsError {
  #[error("Please, write a positive number")]
  Negative,
  #[error("Please, write a number in Arabic numerals")]
  NotANumber,
  #[error("Please, write a number less than {cap}")]
  TooLarge { cap: usize },
}

pub(crate) fn parse_max_comments(
  input: &str,
  cap: usize,
) -> Result<usize, MaxCommentsError> {
  let trimmed = input.trim_start();

  let (negative, unsigned) = match trimmed.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
  };

  let (radix, unsigned) = match unsigned
    .strip_prefix("0x")
    .or_else(|| unsigned.strip_prefix("0X"))
  {
    Some(hex) => (16, hex),
    None => (10, unsigned),
  };

  let digits = unsigned
    .char_indices()
    .find(|(_, ch)| !ch.is_digit(radix))
    .map_or(unsigned, |(end, _)| &unsigned[..end]);

  if digits.is_empty() {
    return Err(MaxCommentsError::NotANumber);
  }

  let Ok(value) = usize::from_str_radix(digits, radix) else {
    return Err(if negative {
      MaxCommentsError::Negative
    } else {
      MaxCommentsError::TooLarge { cap }
    });
  };

  if negative && value != 0 {
    return Err(MaxCommentsError::Negative);
  }

  if value > cap {
    return Err(MaxCommentsError::TooLarge { cap });
  }

  Ok(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_every_value_up_to_the_cap() {
    for value in 0..=10 {
      assert_eq!(parse_max_comments(&value.to_string(), 10), Ok(value));
    }
  }

  #[test]
  fn rejects_non_numeric_input() {
    assert_eq!(
      parse_max_comments("abc", 10),
      Err(MaxCommentsError::NotANumber)
    );

    assert_eq!(parse_max_comments("", 10), Err(MaxCommentsError::NotANumber));
    assert_eq!(parse_max_comments("-", 10), Err(MaxCommentsError::NotANumber));
  }

  #[test]
  fn rejects_negative_input() {
    assert_eq!(parse_max_comments("-1", 10), Err(MaxCommentsError::Negative));

    assert_eq!(
      parse_max_comments("-99999999999999999999999", 10),
      Err(MaxCommentsError::Negative)
    );
  }

  #[test]
  fn rejects_values_over_the_cap() {
    assert_eq!(
      parse_max_comments("11", 10),
      Err(MaxCommentsError::TooLarge { cap: 10 })
    );

    assert_eq!(
      parse_max_comments("99999999999999999999999", 10),
      Err(MaxCommentsError::TooLarge { cap: 10 })
    );
  }

  #[test]
  fn reads_leading_integer_prefix() {
    assert_eq!(parse_max_comments("  4 comments", 10), Ok(4));
    assert_eq!(parse_max_comments("+7", 10), Ok(7));
    assert_eq!(parse_max_comments("-0", 10), Ok(0));
    assert_eq!(parse_max_comments("2.9", 10), Ok(2));
  }

  #[test]
  fn reads_hexadecimal_prefix() {
    assert_eq!(parse_max_comments("0x5", 10), Ok(5));
    assert_eq!(parse_max_comments("0XA", 10), Ok(10));
    assert_eq!(
      parse_max_comments("0xb", 10),
      Err(MaxCommentsError::TooLarge { cap: 10 })
    );
    assert_eq!(parse_max_comments("-0x1", 10), Err(MaxCommentsError::Negative));
    assert_eq!(parse_max_comments("0x", 10), Err(MaxCommentsError::NotANumber));
    assert_eq!(parse_max_comments("0xg", 10), Err(MaxCommentsError::NotANumber));
  }

  #[test]
  fn messages_match_field_hints() {
    assert_eq!(
      MaxCommentsError::TooLarge { cap: 10 }.to_string(),
      "Please, write a number less than 10"
    );

    assert_eq!(
      MaxCommentsError::NotANumber.to_string(),
      "Please, write a number in Arabic numerals"
    );
  }
}
