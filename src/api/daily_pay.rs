use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::pay::{DailyPay, parse_amount};

/// Raw field values from the work-log form. Each one is read like the form
/// reads it: the numeric prefix, or zero.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct DailyPayQuery {
    #[param(example = "10")]
    pub pay_rate1: String,

    #[param(example = "0")]
    pub pay_rate2: String,

    #[param(example = "8")]
    pub hours_payrate1: String,

    #[param(example = "0")]
    pub hours_payrate2: String,

    /// May be negative.
    #[param(example = "5")]
    pub deduction: String,
}

impl DailyPayQuery {
    pub fn daily_pay(&self) -> DailyPay {
        DailyPay {
            pay_rate1: parse_amount(&self.pay_rate1),
            pay_rate2: parse_amount(&self.pay_rate2),
            hours_payrate1: parse_amount(&self.hours_payrate1),
            hours_payrate2: parse_amount(&self.hours_payrate2),
            deduction: parse_amount(&self.deduction),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DailyPayResponse {
    /// Two decimals, e.g. `"75.00"`.
    #[schema(example = "75.00")]
    pub daily_pay: String,
}

#[utoipa::path(
    get,
    path = "/api/daily-pay",
    params(DailyPayQuery),
    responses(
        (status = 200, description = "Daily pay for the given hours and rates", body = DailyPayResponse)
    ),
    tag = "Pay"
)]
pub async fn daily_pay(query: web::Query<DailyPayQuery>) -> impl Responder {
    HttpResponse::Ok().json(DailyPayResponse {
        daily_pay: query.daily_pay().to_string(),
    })
}
