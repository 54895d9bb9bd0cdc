use once_cell::sync::Lazy;
use reqwest::Client;

// No client-side timeout: an analysis call is allowed to run until the service settles it.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

pub fn get_http_client() -> &'static Client {
    &HTTP_CLIENT
}
