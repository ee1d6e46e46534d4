//! Advanced section: auto-registration.

use super::{Block, Page};

pub fn auto_registration() -> Page {
    Page::new(
        "Auto-Registration",
        vec![
            Block::prose(
                "courier includes a derive-based registrar that discovers and registers \
                 all request handlers in your crate. This eliminates manual registration \
                 and reduces boilerplate.",
            ),
            Block::heading("How It Works"),
            Block::prose(
                "The #[handler] attribute records each handler at compile time; \
                 auto_register() then wires every recorded handler into the builder. No \
                 reflection, no startup scanning.",
            ),
            Block::heading("Usage"),
            Block::prose("Call auto_register on the builder:"),
            Block::rust(
                "use courier::Mediator;\n\
                 \n\
                 let mediator = Mediator::builder()\n    \
                     .auto_register()\n    \
                     .build();",
            ),
            Block::heading("Creating Handlers"),
            Block::prose(
                "Annotate the handler - no manual registration required:",
            ),
            Block::rust(
                "pub struct GetUser {\n    \
                     pub user_id: String,\n\
                 }\n\
                 \n\
                 impl Request for GetUser {\n    \
                     type Response = User;\n\
                 }\n\
                 \n\
                 #[courier::handler]\n\
                 impl Handle<GetUser> for GetUserHandler {\n    \
                     async fn handle(&self, request: GetUser) -> User {\n        \
                         User { id: request.user_id, ..Default::default() }\n    \
                     }\n\
                 }",
            ),
            Block::heading("Generated Code"),
            Block::prose(
                "Behind the scenes the macro expands to a registration entry the \
                 builder collects:",
            ),
            Block::rust(
                "// Generated by #[courier::handler]\n\
                 courier::register_handler! {\n    \
                     GetUser => GetUserHandler,\n    \
                     CreateOrder => CreateOrderHandler,\n    \
                     // ... all other annotated handlers\n\
                 }",
            ),
            Block::heading("Benefits"),
            Block::list([
                "Zero boilerplate: no need to register each handler by hand",
                "Compile-time safety: registration happens at compile time, not runtime",
                "No reflection: no scanning at startup, faster application start",
                "Automatic discovery: new handlers are registered when you add them",
                "Type safe: every registration is strongly typed",
            ]),
            Block::callout(
                "Performance Tip",
                "The registrar runs at compile time, so there is zero runtime overhead. \
                 This makes auto-registration faster than the scanning approaches used \
                 by other mediator libraries.",
            ),
            Block::heading("Combining with Manual Registration"),
            Block::prose(
                "You can still register handlers manually; manual registrations override \
                 auto-registered ones:",
            ),
            Block::rust(
                "let mediator = Mediator::builder()\n    \
                     .auto_register()\n    \
                     // Override one handler with a custom implementation\n    \
                     .request_handler::<GetUser, _>(CachedGetUserHandler::new(cache))\n    \
                     .build();",
            ),
        ],
    )
}
