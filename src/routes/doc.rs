use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        books::{BookList, CreateBookRequest, UpdateBookRequest},
        cart::{AddToCartRequest, CartCreated, CartLineDto, CartView, SetQuantityRequest},
        content::{BlogList, PodcastList},
        estimate::EstimateRequest,
        orders::{CheckoutRequest, OrderList, OrderWithItems, PayOrderRequest},
        wishlist::{AddWishlistRequest, WishlistView},
    },
    models::{BlogPost, Book, BookFormat, CartLine, Order, OrderItem, PodcastEpisode},
    pricing::{AddOn, Estimate, ServiceType},
    response::{ApiResponse, Meta},
    routes::{admin, books, cart, content, estimate, health, orders, params, wishlist},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        books::list_books,
        books::get_book,
        estimate::estimate,
        cart::create_cart,
        cart::view_cart,
        cart::add_item,
        cart::set_quantity,
        cart::remove_item,
        wishlist::list_wishlist,
        wishlist::add_wishlist,
        wishlist::remove_wishlist,
        orders::list_orders,
        orders::checkout,
        orders::get_order,
        orders::pay_order,
        content::list_posts,
        content::list_episodes,
        admin::create_book,
        admin::update_book,
        admin::delete_book,
        admin::adjust_inventory,
        admin::list_low_stock,
        admin::list_all_orders,
        admin::get_order_admin,
        admin::update_order_status,
    ),
    components(
        schemas(
            Book,
            BookFormat,
            CartLine,
            Order,
            OrderItem,
            BlogPost,
            PodcastEpisode,
            ServiceType,
            AddOn,
            Estimate,
            EstimateRequest,
            BookList,
            CreateBookRequest,
            UpdateBookRequest,
            CartCreated,
            AddToCartRequest,
            SetQuantityRequest,
            CartLineDto,
            CartView,
            CheckoutRequest,
            PayOrderRequest,
            OrderWithItems,
            OrderList,
            AddWishlistRequest,
            WishlistView,
            BlogList,
            PodcastList,
            admin::UpdateOrderStatusRequest,
            admin::InventoryAdjustRequest,
            admin::LowStockQuery,
            params::Pagination,
            params::BookQuery,
            params::OrderListQuery,
            Meta,
            ApiResponse<Book>,
            ApiResponse<BookList>,
            ApiResponse<Estimate>,
            ApiResponse<CartView>,
            ApiResponse<OrderWithItems>,
            ApiResponse<OrderList>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Books", description = "Catalog browsing"),
        (name = "Estimate", description = "Editorial-services price estimator"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Wishlist", description = "Wishlist endpoints"),
        (name = "Orders", description = "Checkout and order history"),
        (name = "Content", description = "Blog and podcast listings"),
        (name = "Admin", description = "Back-office endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
