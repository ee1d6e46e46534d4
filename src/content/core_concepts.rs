//! Core Concepts section: requests, notifications, behaviors.

use super::{Block, Page};

pub fn requests() -> Page {
    Page::new(
        "Requests & Handlers",
        vec![
            Block::prose(
                "Requests are the core of courier's request/response pattern. Each \
                 request type implements Request and has exactly one handler that \
                 processes it.",
            ),
            Block::heading("Query Pattern"),
            Block::prose(
                "Queries are requests that retrieve data without modifying state. They \
                 follow the query side of CQRS (Command Query Responsibility \
                 Segregation).",
            ),
            Block::rust(
                "// Request with response\n\
                 pub struct GetUser {\n    \
                     pub user_id: String,\n\
                 }\n\
                 \n\
                 impl Request for GetUser {\n    \
                     type Response = User;\n\
                 }\n\
                 \n\
                 // Handler\n\
                 pub struct GetUserHandler {\n    \
                     repository: Arc<dyn UserRepository>,\n\
                 }\n\
                 \n\
                 impl Handle<GetUser> for GetUserHandler {\n    \
                     async fn handle(&self, request: GetUser) -> User {\n        \
                         self.repository.get_by_id(&request.user_id).await\n    \
                     }\n\
                 }",
            ),
            Block::heading("Command Pattern"),
            Block::prose(
                "Commands are requests that modify state. They represent actions or \
                 operations that change the system's data.",
            ),
            Block::rust(
                "// Command (request that modifies state)\n\
                 pub struct CreateOrder {\n    \
                     pub customer_id: String,\n    \
                     pub items: Vec<OrderItem>,\n\
                 }\n\
                 \n\
                 impl Request for CreateOrder {\n    \
                     type Response = String;\n\
                 }\n\
                 \n\
                 pub struct CreateOrderHandler {\n    \
                     repository: Arc<dyn OrderRepository>,\n\
                 }\n\
                 \n\
                 impl Handle<CreateOrder> for CreateOrderHandler {\n    \
                     async fn handle(&self, request: CreateOrder) -> String {\n        \
                         let order = Order::new(request.customer_id, request.items);\n        \
                         self.repository.add(&order).await;\n        \
                         order.id\n    \
                     }\n\
                 }",
            ),
            Block::heading("Registration"),
            Block::prose("Register request handlers on the mediator builder:"),
            Block::rust(
                "let mediator = Mediator::builder()\n    \
                     .request_handler::<GetUser, _>(get_user_handler)\n    \
                     .request_handler::<CreateOrder, _>(create_order_handler)\n    \
                     .build();",
            ),
            Block::heading("Sending Requests"),
            Block::prose("Dispatch requests with send:"),
            Block::rust(
                "// Query example\n\
                 let user = mediator.send(GetUser { user_id: \"123\".into() }).await?;\n\
                 \n\
                 // Command example\n\
                 let order_id = mediator\n    \
                     .send(CreateOrder {\n        \
                         customer_id: \"456\".into(),\n        \
                         items: order_items,\n    \
                     })\n    \
                     .await?;",
            ),
            Block::heading("Key Characteristics"),
            Block::list([
                "One handler per request: each request type has exactly one handler",
                "Type safe: request and response types are enforced at compile time",
                "Direct execution: requests are processed immediately and return a result",
                "Pipeline support: requests flow through pipeline behaviors before reaching the handler",
            ]),
            Block::callout(
                "CQRS Pattern",
                "courier naturally supports CQRS by separating queries (read operations) \
                 from commands (write operations). The separation improves code \
                 organization, testability, and allows different optimization strategies \
                 for reads and writes.",
            ),
        ],
    )
}

pub fn notifications() -> Page {
    Page::new(
        "Notifications",
        vec![
            Block::prose(
                "Notifications let you publish events to multiple handlers. Unlike \
                 requests, notifications don't return a value and can have zero or more \
                 handlers.",
            ),
            Block::heading("Defining a Notification"),
            Block::prose("Create a type that implements Notification:"),
            Block::rust(
                "use courier::Notification;\n\
                 \n\
                 #[derive(Clone)]\n\
                 pub struct OrderPlaced {\n    \
                     pub order_id: String,\n    \
                     pub amount: Decimal,\n\
                 }\n\
                 \n\
                 impl Notification for OrderPlaced {}",
            ),
            Block::heading("Creating Handlers"),
            Block::prose(
                "You can create multiple handlers for the same notification. Each \
                 handler runs when the notification is published:",
            ),
            Block::rust(
                "pub struct SendEmail;\n\
                 \n\
                 impl HandleNotification<OrderPlaced> for SendEmail {\n    \
                     async fn handle(&self, notification: OrderPlaced) {\n        \
                         println!(\"Sending confirmation for order {}\", notification.order_id);\n    \
                     }\n\
                 }\n\
                 \n\
                 pub struct UpdateInventory;\n\
                 \n\
                 impl HandleNotification<OrderPlaced> for UpdateInventory {\n    \
                     async fn handle(&self, notification: OrderPlaced) {\n        \
                         println!(\"Updating stock for order {}\", notification.order_id);\n    \
                     }\n\
                 }",
            ),
            Block::heading("Registering Handlers"),
            Block::prose(
                "Register notification handlers on the builder, optionally with a retry \
                 policy:",
            ),
            Block::rust(
                "let retry = RetryPolicy {\n    \
                     max_attempts: 3,\n    \
                     delay: Duration::from_millis(1000),\n\
                 };\n\
                 \n\
                 let mediator = Mediator::builder()\n    \
                     .notification_handler(SendEmail, Some(retry.clone()))\n    \
                     .notification_handler(UpdateInventory, Some(retry))\n    \
                     .notification_handler(LogOrder, None) // no retry for logging\n    \
                     .build();",
            ),
            Block::heading("Publishing Notifications"),
            Block::prose("Use publish to fan an event out to every registered handler:"),
            Block::rust(
                "mediator\n    \
                     .publish(OrderPlaced {\n        \
                         order_id: \"ORD-12345\".into(),\n        \
                         amount: dec!(99.99),\n    \
                     })\n    \
                     .await;",
            ),
            Block::heading("Asynchronous Processing"),
            Block::prose(
                "Notifications are processed asynchronously through a background worker. \
                 This means:",
            ),
            Block::list([
                "publish returns immediately after queuing the notification",
                "Handlers are executed in the background by a worker task",
                "You can configure the channel size and max concurrent consumers",
            ]),
            Block::heading("Retry Policies"),
            Block::prose("Retry behavior is configured per handler:"),
            Block::rust(
                "let retry = RetryPolicy {\n    \
                     max_attempts: 3,\n    \
                     delay: Duration::from_millis(1000),\n\
                 };\n\
                 \n\
                 builder.notification_handler(SendEmail, Some(retry));",
            ),
            Block::callout(
                "Use Cases",
                "Notifications are perfect for event-driven architectures, sending \
                 emails or push notifications, updating multiple systems after an \
                 action, logging and auditing, and cache invalidation.",
            ),
        ],
    )
}

pub fn behaviors() -> Page {
    Page::new(
        "Pipeline Behaviors",
        vec![
            Block::prose(
                "Pipeline behaviors add cross-cutting concerns to your request/response \
                 pipeline. They wrap around the execution of handlers, similar to tower \
                 middleware.",
            ),
            Block::heading("Creating a Behavior"),
            Block::prose(
                "Implement PipelineBehavior to create a behavior. Here's a simple \
                 logging behavior:",
            ),
            Block::rust(
                "pub struct LoggingBehavior;\n\
                 \n\
                 impl<R: Request> PipelineBehavior<R> for LoggingBehavior {\n    \
                     async fn handle(&self, request: R, next: Next<'_, R>) -> R::Response {\n        \
                         println!(\"[log] handling {}\", std::any::type_name::<R>());\n        \
                         let response = next.run(request).await;\n        \
                         println!(\"[log] handled {}\", std::any::type_name::<R>());\n        \
                         response\n    \
                     }\n\
                 }",
            ),
            Block::heading("Registering Behaviors"),
            Block::prose(
                "Register behaviors on the builder. They apply to every request:",
            ),
            Block::rust(
                "let mediator = Mediator::builder()\n    \
                     .pipeline_behavior(LoggingBehavior)\n    \
                     .request_handler::<Ping, _>(PingHandler)\n    \
                     .build();",
            ),
            Block::heading("Execution Order"),
            Block::prose(
                "Behaviors execute in registration order. The first registered behavior \
                 is the outermost wrapper; the last sits closest to the handler.",
            ),
            Block::code(
                "Behavior A (before) -> Behavior B (before) -> Handler -> Behavior B (after) -> Behavior A (after)",
                "text",
            ),
            Block::heading("Common Use Cases"),
            Block::list([
                "Logging: record request/response details",
                "Validation: validate requests before handling",
                "Caching: cache responses for repeated requests",
                "Performance monitoring: measure execution time",
                "Transaction management: wrap handlers in database transactions",
                "Authorization: check permissions",
            ]),
            Block::heading("Example: Validation Behavior"),
            Block::rust(
                "pub struct ValidationBehavior<V> {\n    \
                     validator: V,\n\
                 }\n\
                 \n\
                 impl<R, V> PipelineBehavior<R> for ValidationBehavior<V>\n\
                 where\n    \
                     R: Request,\n    \
                     V: Validate<R>,\n\
                 {\n    \
                     async fn handle(&self, request: R, next: Next<'_, R>) -> R::Response {\n        \
                         self.validator.validate(&request)?;\n        \
                         next.run(request).await\n    \
                     }\n\
                 }",
            ),
        ],
    )
}

pub fn notification_behaviors() -> Page {
    Page::new(
        "Notification Behaviors",
        vec![
            Block::prose(
                "courier provides two kinds of behaviors for notifications, adding \
                 cross-cutting concerns at different levels of the notification \
                 pipeline.",
            ),
            Block::heading("NotificationBehavior"),
            Block::prose(
                "A NotificationBehavior wraps the entire publishing process. It runs \
                 once per publish call, before and after all handlers are invoked.",
            ),
            Block::rust(
                "// Wraps the entire notification publishing process\n\
                 pub struct PublishLogging;\n\
                 \n\
                 impl<N: Notification> NotificationBehavior<N> for PublishLogging {\n    \
                     async fn handle(&self, notification: N, next: Next<'_, N>) {\n        \
                         println!(\"before publishing {}\", std::any::type_name::<N>());\n        \
                         next.run(notification).await;\n        \
                         println!(\"after publishing {}\", std::any::type_name::<N>());\n    \
                     }\n\
                 }",
            ),
            Block::callout(
                "Use Cases",
                "Logging the notification event, performance monitoring for the entire \
                 publish operation, transaction management, global error handling.",
            ),
            Block::heading("NotificationHandlerBehavior"),
            Block::prose(
                "A NotificationHandlerBehavior wraps each individual handler execution. \
                 It runs once for every handler that processes the notification.",
            ),
            Block::rust(
                "// Wraps each individual handler execution\n\
                 pub struct HandlerLogging;\n\
                 \n\
                 impl<N: Notification> NotificationHandlerBehavior<N> for HandlerLogging {\n    \
                     async fn handle(&self, notification: N, next: Next<'_, N>) {\n        \
                         println!(\"before handler execution\");\n        \
                         next.run(notification).await;\n        \
                         println!(\"after handler execution\");\n    \
                     }\n\
                 }",
            ),
            Block::callout(
                "Use Cases",
                "Per-handler error handling, retry logic for individual handlers, \
                 handler-specific logging, performance tracking per handler.",
            ),
            Block::heading("Registration"),
            Block::prose("Register both kinds on the builder:"),
            Block::rust(
                "let mediator = Mediator::builder()\n    \
                     .notification_behavior(PublishLogging)\n    \
                     .notification_handler_behavior(HandlerLogging)\n    \
                     .build();",
            ),
            Block::heading("Execution Order"),
            Block::prose("Understanding the flow matters when both kinds are in play:"),
            Block::code(
                "1. NotificationBehavior (before)\n\
                 2. NotificationHandlerBehavior (before) -> Handler 1\n\
                 3. NotificationHandlerBehavior (after)\n\
                 4. NotificationHandlerBehavior (before) -> Handler 2\n\
                 5. NotificationHandlerBehavior (after)\n\
                 6. NotificationBehavior (after)",
                "text",
            ),
            Block::callout(
                "Key Differences",
                "NotificationBehavior runs once per publish and scopes the whole \
                 operation; NotificationHandlerBehavior runs once per handler and scopes \
                 a single execution. Use the former for global concerns, the latter for \
                 handler-specific ones.",
            ),
        ],
    )
}
