use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 \-()]{5,19}$").expect("Invalid phone regex"));

static PIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4,8}$").expect("Invalid pin regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    // 电话格式校验：数字为主，允许 +、空格、括号与连字符
    if !PHONE_RE.is_match(phone) {
        return Err("Phone format is invalid");
    }
    Ok(())
}

pub fn validate_pin(pin: &str) -> Result<(), &'static str> {
    // PIN 格式校验：4 到 8 位数字
    if !PIN_RE.is_match(pin) {
        return Err("PIN must be 4 to 8 digits");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username() {
        assert!(validate_username("operator").is_ok());
        assert!(validate_username("op-1_a").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("bad name").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("+44 20 7946 0958").is_ok());
        assert!(validate_phone("07911123456").is_ok());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn test_pin() {
        assert!(validate_pin("1234").is_ok());
        assert!(validate_pin("12345678").is_ok());
        assert!(validate_pin("123").is_err());
        assert!(validate_pin("12ab").is_err());
    }
}
