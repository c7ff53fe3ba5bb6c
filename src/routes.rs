use crate::{
    api::{advance, dashboard, employee, leave, overtime, salary},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let api_limiter = build_limiter(config.rate_api_per_min);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(api_limiter)
            .service(
                web::scope("/employees")
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::put().to(employee::update_employee))
                            // DELETE is a soft delete, same as deactivate
                            .route(web::delete().to(employee::deactivate_employee)),
                    )
                    .service(
                        web::resource("/{id}/deactivate")
                            .route(web::put().to(employee::deactivate_employee)),
                    ),
            )
            .service(
                web::scope("/overtimes")
                    .service(web::resource("").route(web::post().to(overtime::create_overtime)))
                    .service(
                        web::resource("/employee/{id}")
                            .route(web::get().to(overtime::list_overtimes)),
                    )
                    .service(
                        web::resource("/employee/{id}/month/{month}/year/{year}")
                            .route(web::get().to(overtime::list_overtimes_for_month)),
                    )
                    .service(
                        web::resource("/{id}").route(web::delete().to(overtime::delete_overtime)),
                    ),
            )
            .service(
                web::scope("/advances")
                    .service(web::resource("").route(web::post().to(advance::create_advance)))
                    .service(
                        web::resource("/employee/{id}").route(web::get().to(advance::list_advances)),
                    )
                    .service(
                        web::resource("/employee/{id}/month/{month}/year/{year}")
                            .route(web::get().to(advance::list_advances_for_month)),
                    ),
            )
            .service(
                web::scope("/leaves")
                    .service(web::resource("").route(web::post().to(leave::create_leave)))
                    .service(
                        web::resource("/employee/{id}").route(web::get().to(leave::list_leaves)),
                    )
                    .service(
                        web::resource("/employee/{id}/month/{month}/year/{year}")
                            .route(web::get().to(leave::list_leaves_for_month)),
                    ),
            )
            .service(
                web::scope("/salaries")
                    .service(
                        web::resource("/preview").route(web::post().to(salary::preview_salary)),
                    )
                    .service(
                        web::resource("/generate").route(web::post().to(salary::generate_salary)),
                    )
                    .service(
                        web::resource("/employee/{id}")
                            .route(web::get().to(salary::salary_history)),
                    )
                    .service(
                        web::resource("/{id}/resend-sms")
                            .route(web::post().to(salary::resend_sms)),
                    ),
            )
            .service(web::resource("/dashboard").route(web::get().to(dashboard::get_dashboard))),
    );
}
