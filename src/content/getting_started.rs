//! Getting Started section: introduction, installation, basic usage.

use super::{Block, Page};

pub fn introduction() -> Page {
    Page::new(
        "Introduction to courier",
        vec![
            Block::prose(
                "courier is a mediator pattern implementation for Rust applications. It \
                 helps you decouple your application logic by providing a simple, elegant \
                 way to send requests and publish notifications.",
            ),
            Block::heading("What is the Mediator Pattern?"),
            Block::prose(
                "The mediator pattern defines an object that encapsulates how a set of \
                 objects interact. It promotes loose coupling by keeping objects from \
                 referring to each other explicitly, and it lets you vary their \
                 interaction independently.",
            ),
            Block::heading("Key Features"),
            Block::list([
                "Request/response pattern: send requests and get typed responses",
                "Notifications: publish events to multiple handlers",
                "Pipeline behaviors: add cross-cutting concerns like logging, validation and caching",
                "Background workers: process notifications asynchronously",
                "Resilience: built-in retry policies and dead-letter queues",
                "First-class integration with the async ecosystem",
            ]),
            Block::heading("When to Use courier"),
            Block::prose("courier is ideal for:"),
            Block::list([
                "CQRS (Command Query Responsibility Segregation) architectures",
                "Clean / hexagonal architecture implementations",
                "Applications requiring clear separation of concerns",
                "Event-driven systems within a single process",
                "Decoupling business logic from infrastructure",
            ]),
        ],
    )
}

pub fn installation() -> Page {
    Page::new(
        "Installation",
        vec![
            Block::heading("Package Installation"),
            Block::prose("Add courier to your project with cargo:"),
            Block::code("cargo add courier", "bash"),
            Block::prose("Or declare it in Cargo.toml directly:"),
            Block::code(
                "[dependencies]\n\
                 courier = \"0.3\"\n\
                 tokio = { version = \"1\", features = [\"full\"] }",
                "toml",
            ),
            Block::heading("Basic Setup"),
            Block::prose(
                "Build a mediator from its builder. The builder takes the notification \
                 worker configuration and a dead-letter queue that collects notifications \
                 which failed after all retry attempts.",
            ),
            Block::rust(
                "use courier::{Mediator, DeadLetterQueue};\n\
                 \n\
                 let dead_letters = DeadLetterQueue::new();\n\
                 \n\
                 let mediator = Mediator::builder()\n    \
                     .notification_channel_size(100)\n    \
                     .max_concurrent_consumers(5)\n    \
                     .dead_letters(dead_letters.clone())\n    \
                     .build();",
            ),
            Block::heading("Configuration Options"),
            Block::prose("The builder accepts the following options:"),
            Block::list([
                "notification_channel_size: size of the notification channel buffer (default: 100)",
                "max_concurrent_consumers: maximum concurrent notification handlers (default: 5)",
            ]),
            Block::heading("Dead Letter Queue"),
            Block::prose(
                "The dead-letter queue collects notifications that failed to process \
                 after all retry attempts. This allows you to:",
            ),
            Block::list([
                "Monitor and log failed notifications",
                "Implement custom retry logic or manual intervention",
                "Analyze patterns in notification failures",
                "Ensure no notifications are silently lost",
            ]),
            Block::prose(
                "Each dead-letter entry contains the failed notification and error \
                 details, so you can investigate and potentially reprocess failed \
                 messages.",
            ),
            Block::heading("Using with axum"),
            Block::prose(
                "In a web service, build the mediator once at startup and hand it to \
                 your application state:",
            ),
            Block::rust(
                "let dead_letters = DeadLetterQueue::new();\n\
                 let mediator = Mediator::builder()\n    \
                     .dead_letters(dead_letters.clone())\n    \
                     .build();\n\
                 \n\
                 let app = Router::new()\n    \
                     .route(\"/users/{id}\", get(get_user))\n    \
                     .with_state(mediator);",
            ),
        ],
    )
}

pub fn basic_usage() -> Page {
    Page::new(
        "Basic Usage",
        vec![
            Block::prose(
                "This guide walks you through creating your first request and handler \
                 with courier.",
            ),
            Block::heading("Step 1: Define a Request"),
            Block::prose(
                "Create a type that implements Request, naming the response type you \
                 expect back.",
            ),
            Block::rust(
                "use courier::Request;\n\
                 \n\
                 pub struct Ping {\n    \
                     pub message: String,\n\
                 }\n\
                 \n\
                 impl Request for Ping {\n    \
                     type Response = String;\n\
                 }",
            ),
            Block::heading("Step 2: Create a Handler"),
            Block::prose("Implement Handle for your request type."),
            Block::rust(
                "use courier::Handle;\n\
                 \n\
                 pub struct PingHandler;\n\
                 \n\
                 impl Handle<Ping> for PingHandler {\n    \
                     async fn handle(&self, request: Ping) -> String {\n        \
                         format!(\"{} Pong\", request.message)\n    \
                     }\n\
                 }",
            ),
            Block::heading("Step 3: Register the Handler"),
            Block::prose("Register the handler on the builder."),
            Block::rust(
                "let mediator = Mediator::builder()\n    \
                     .request_handler::<Ping, _>(PingHandler)\n    \
                     .build();",
            ),
            Block::heading("Step 4: Send the Request"),
            Block::prose("Use the mediator to send your request."),
            Block::rust(
                "let response = mediator\n    \
                     .send(Ping { message: \"Hello\".into() })\n    \
                     .await?;\n\
                 // response == \"Hello Pong\"",
            ),
            Block::callout(
                "That's it!",
                "You've just created your first courier request/response flow. The \
                 mediator pattern helps keep your code clean and decoupled.",
            ),
        ],
    )
}
