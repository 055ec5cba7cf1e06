use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[allow(clippy::upper_case_acronyms)]
pub enum CurrencyDoc { RUB, USD, EUR }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct AccountDoc {
    pub id: Option<i64>,
    #[schema(example = 100.5)]
    pub balance: f64,
    pub currency: CurrencyDoc,
    pub clientId: i64,
    #[schema(min_length = 1, max_length = 255)]
    pub name: String,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ClientDoc {
    pub id: Option<i64>,
    #[schema(min_length = 1, max_length = 255)]
    pub name: String,
    #[schema(min_length = 1, max_length = 255)]
    pub surname: String,
    pub middleName: Option<String>,
    #[schema(format = Date, example = "1985-03-14")]
    pub birthday: Option<String>,
    pub accounts: Option<Vec<AccountDoc>>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ApiErrorDoc {
    pub status: u16,
    #[schema(example = "validation")]
    pub errType: String,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::accounts::get_all,
        crate::routes::accounts::get_one,
        crate::routes::accounts::find_by_client_id,
        crate::routes::accounts::create,
        crate::routes::accounts::create_list,
        crate::routes::accounts::update,
        crate::routes::accounts::update_all_of_client,
        crate::routes::accounts::delete_one,
        crate::routes::accounts::delete_all_of_client,
        crate::routes::accounts::delete_list,
    ),
    components(schemas(HealthResponse, CurrencyDoc, AccountDoc, ApiErrorDoc)),
    tags((name = "health"), (name = "accounts"))
)]
pub struct AccountsApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clients::get_all,
        crate::routes::clients::find_one,
        crate::routes::clients::create,
        crate::routes::clients::update,
        crate::routes::clients::delete_one,
    ),
    components(schemas(HealthResponse, CurrencyDoc, AccountDoc, ClientDoc, ApiErrorDoc)),
    tags((name = "health"), (name = "clients"))
)]
pub struct ClientsApiDoc;
