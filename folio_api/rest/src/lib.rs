use std::net::IpAddr;

use axum::Router;
use folio_core_contact_contracts::ContactService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    contact: Contact,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactService,
{
    pub fn new(contact: Contact) -> Self {
        Self { contact }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::contact::router(self.contact.into()));

        // Outermost first: the request id must exist before the trace span is
        // created, and panics inside handlers must still produce a response.
        let router = middlewares::trace::add(router);
        let router = middlewares::panic_handler::add(router);
        middlewares::request_id::add(router)
    }
}
