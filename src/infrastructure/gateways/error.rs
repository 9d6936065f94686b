use crate::domain::errors::DomainError;

const UNDEFINED_FUNCTION: &str = "42883";
const RAISE_EXCEPTION: &str = "P0001";

pub fn map_sqlx(procedure: &'static str, err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    UNDEFINED_FUNCTION => {
                        return DomainError::remote_call(
                            procedure,
                            format!("procedure not found or signature mismatch: {}", db_err.message()),
                        );
                    }
                    RAISE_EXCEPTION => {
                        return DomainError::remote_call(procedure, db_err.message().to_string());
                    }
                    other => {
                        return DomainError::remote_call(
                            procedure,
                            format!("[{other}] {}", db_err.message()),
                        );
                    }
                }
            }

            DomainError::remote_call(procedure, db_err.message().to_string())
        }
        _ => DomainError::remote_call(procedure, err.to_string()),
    }
}
