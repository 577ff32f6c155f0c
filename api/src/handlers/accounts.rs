//! Account handlers
//!
//! Create, fetch, update and delete a customer's account.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{validate_mobile_number, validate_request};
use crate::domain::entities::{AccountDetails, AccountNumber, CustomerDetails};
use crate::domain::ports::UnitOfWork;
use crate::error::AppError;
use crate::AppState;

pub const STATUS_201: &str = "201";
pub const MESSAGE_201: &str = "Account created successfully";
pub const STATUS_200: &str = "200";
pub const MESSAGE_200: &str = "Request processed successfully";
pub const STATUS_417: &str = "417";
pub const MESSAGE_417_UPDATE: &str =
    "Update operation failed. Please try again or contact Dev team";
pub const MESSAGE_417_DELETE: &str =
    "Delete operation failed. Please try again or contact Dev team";

/// Customer fields with an optional nested account
///
/// Used as the create/update request body and as the fetch response.
/// Missing fields deserialize as empty so that validation, not the JSON
/// extractor, reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDto {
    #[validate(length(
        min = 5,
        max = 30,
        message = "The length of the customer name should be between 5 and 30"
    ))]
    pub name: String,

    #[validate(email(message = "Email address should be a valid value"))]
    pub email: String,

    #[validate(custom(function = "validate_mobile_number"))]
    pub mobile_number: String,

    #[serde(alias = "accountsDto", skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub account: Option<AccountDto>,
}

/// Account fields of [`CustomerDto`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountDto {
    #[validate(range(
        min = 1_000_000_000i64,
        max = 9_999_999_999i64,
        message = "AccountNumber must be 10 digits"
    ))]
    pub account_number: i64,

    #[validate(length(min = 1, message = "AccountType can not be a null or empty"))]
    pub account_type: String,

    #[validate(length(min = 1, message = "BranchAddress can not be a null or empty"))]
    pub branch_address: String,
}

/// Query string carrying a mobile number
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct MobileNumberQuery {
    #[validate(custom(function = "validate_mobile_number"))]
    pub mobile_number: String,
}

/// Status body for create/update/delete
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub status_code: String,
    pub status_msg: String,
}

impl ResponseBody {
    fn new(status_code: &str, status_msg: &str) -> Self {
        Self {
            status_code: status_code.to_string(),
            status_msg: status_msg.to_string(),
        }
    }
}

impl From<CustomerDto> for CustomerDetails {
    fn from(dto: CustomerDto) -> Self {
        CustomerDetails {
            name: dto.name,
            email: dto.email,
            mobile_number: dto.mobile_number,
            account: dto.account.map(|a| AccountDetails {
                account_number: AccountNumber(a.account_number),
                account_type: a.account_type,
                branch_address: a.branch_address,
            }),
        }
    }
}

impl From<CustomerDetails> for CustomerDto {
    fn from(details: CustomerDetails) -> Self {
        CustomerDto {
            name: details.name,
            email: details.email,
            mobile_number: details.mobile_number,
            account: details.account.map(|a| AccountDto {
                account_number: a.account_number.0,
                account_type: a.account_type,
                branch_address: a.branch_address,
            }),
        }
    }
}

fn parse_body<T: Validate>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    validate_request(&request)?;
    Ok(request)
}

fn parse_mobile_number(
    query: Result<Query<MobileNumberQuery>, QueryRejection>,
) -> Result<String, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    validate_request(&query)?;
    Ok(query.mobile_number)
}

/// POST /api/create
///
/// Register a customer and open a savings account for them.
pub async fn create_account<U: UnitOfWork + 'static>(
    State(state): State<AppState<U>>,
    payload: Result<Json<CustomerDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ResponseBody>), AppError>
{
    let request = parse_body(payload)?;

    state.accounts_service.create_account(&request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseBody::new(STATUS_201, MESSAGE_201)),
    ))
}

/// GET /api/fetch?mobileNumber=...
pub async fn fetch_account<U: UnitOfWork + 'static>(
    State(state): State<AppState<U>>,
    query: Result<Query<MobileNumberQuery>, QueryRejection>,
) -> Result<Json<CustomerDto>, AppError>
{
    let mobile_number = parse_mobile_number(query)?;

    let details = state.accounts_service.fetch_account(&mobile_number).await?;

    Ok(Json(details.into()))
}

/// PUT /api/update
///
/// Update name/email and account type/branch address. Responds 417 when the
/// service reports that nothing was updated.
pub async fn update_account<U: UnitOfWork + 'static>(
    State(state): State<AppState<U>>,
    payload: Result<Json<CustomerDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ResponseBody>), AppError>
{
    let request = parse_body(payload)?;

    let updated = state.accounts_service.update_account(&request.into()).await?;

    Ok(if updated {
        (StatusCode::OK, Json(ResponseBody::new(STATUS_200, MESSAGE_200)))
    } else {
        (
            StatusCode::EXPECTATION_FAILED,
            Json(ResponseBody::new(STATUS_417, MESSAGE_417_UPDATE)),
        )
    })
}

/// DELETE /api/delete?mobileNumber=...
pub async fn delete_account<U: UnitOfWork + 'static>(
    State(state): State<AppState<U>>,
    query: Result<Query<MobileNumberQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<ResponseBody>), AppError>
{
    let mobile_number = parse_mobile_number(query)?;

    let deleted = state.accounts_service.delete_account(&mobile_number).await?;

    Ok(if deleted {
        (StatusCode::OK, Json(ResponseBody::new(STATUS_200, MESSAGE_200)))
    } else {
        (
            StatusCode::EXPECTATION_FAILED,
            Json(ResponseBody::new(STATUS_417, MESSAGE_417_DELETE)),
        )
    })
}
