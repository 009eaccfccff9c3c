//! The hard-coded default document
//!
//! Used both as the fallback when the persisted slot is missing or
//! unparseable and as the reset target.

use super::model::{
    About, AboutStats, BlogPost, Category, Contacts, Hero, PortfolioImage, Review, Service,
    SiteContent,
};

const CDN: &str = "https://cdn.poehali.dev/projects/a71b4c95-c282-44f4-a183-ded68c7bf58b/files";

/// Build the default content document
pub fn default_content() -> SiteContent {
    SiteContent {
        services: vec![
            Service {
                id: "1".into(),
                title: "Портретная съёмка".into(),
                price: "от 5 000 ₽".into(),
                duration: "1-2 часа".into(),
                description: "Индивидуальная или семейная фотосессия в студии или на природе"
                    .into(),
                icon: "User".into(),
            },
            Service {
                id: "2".into(),
                title: "Свадебная съёмка".into(),
                price: "от 25 000 ₽".into(),
                duration: "весь день".into(),
                description: "Полное сопровождение торжества, от сборов до банкета".into(),
                icon: "Heart".into(),
            },
            Service {
                id: "3".into(),
                title: "Предметная съёмка".into(),
                price: "от 3 000 ₽".into(),
                duration: "1-3 часа".into(),
                description: "Фотографии товаров для каталогов и интернет-магазинов".into(),
                icon: "Package".into(),
            },
            Service {
                id: "4".into(),
                title: "Аренда студии".into(),
                price: "от 1 500 ₽/час".into(),
                duration: "от 1 часа".into(),
                description: "Профессиональная студия с освещением и реквизитом".into(),
                icon: "Camera".into(),
            },
        ],
        reviews: vec![
            Review {
                id: "1".into(),
                name: "Анна Петрова".into(),
                text: "Невероятная атмосфера и профессионализм! Фотографии превзошли все ожидания."
                    .into(),
                rating: 5,
            },
            Review {
                id: "2".into(),
                name: "Дмитрий Соколов".into(),
                text: "Отличная студия с современным оборудованием. Рекомендую!".into(),
                rating: 5,
            },
            Review {
                id: "3".into(),
                name: "Мария Иванова".into(),
                text: "Спасибо за чудесную свадебную фотосессию! Каждый кадр - произведение искусства."
                    .into(),
                rating: 5,
            },
        ],
        blog_posts: vec![
            BlogPost {
                id: "1".into(),
                title: "Как подготовиться к фотосессии".into(),
                date: "15 октября 2025".into(),
                excerpt: "Советы по выбору образа, макияжу и позированию для идеальных снимков"
                    .into(),
                image: format!("{}/ac59771a-5f60-4817-a899-b59d54a72e04.jpg", CDN),
            },
            BlogPost {
                id: "2".into(),
                title: "Тренды фотографии 2025".into(),
                date: "10 октября 2025".into(),
                excerpt: "Актуальные стили и приёмы в современной фотографии".into(),
                image: format!("{}/a9ca06e9-77ad-4c36-89ef-3831023abaca.jpg", CDN),
            },
        ],
        portfolio_images: vec![
            PortfolioImage {
                id: "1".into(),
                url: format!("{}/ac59771a-5f60-4817-a899-b59d54a72e04.jpg", CDN),
                category: Category::Portrait,
                title: "Портретная съёмка".into(),
            },
            PortfolioImage {
                id: "2".into(),
                url: format!("{}/a9ca06e9-77ad-4c36-89ef-3831023abaca.jpg", CDN),
                category: Category::Product,
                title: "Студия".into(),
            },
            PortfolioImage {
                id: "3".into(),
                url: format!("{}/cfa0f17f-4195-49e8-976a-b5785d15a273.jpg", CDN),
                category: Category::Wedding,
                title: "Свадебная фотосессия".into(),
            },
        ],
        contacts: Contacts {
            address: "г. Москва, Шелихова 9к1".into(),
            phone: "+7 (980) 865-42-80".into(),
            email: "info@fstudio.ru".into(),
            hours: "Ежедневно с 10:00 до 22:00".into(),
        },
        hero: Hero {
            badge: "Креативная фотостудия".into(),
            title: "Создаём искусство из мгновений".into(),
            subtitle: "Профессиональная фотосъёмка и аренда студии с креативным подходом к каждому кадру"
                .into(),
        },
        about: About {
            description: "F.STUDIO by MARIA MOROZOVA — это креативное пространство, где рождаются уникальные визуальные истории. Мы создали студию мечты для фотографов и моделей с профессиональным оборудованием и нестандартным подходом к каждой съёмке."
                .into(),
            stats: AboutStats {
                years: "5+".into(),
                shoots: "1000+".into(),
                satisfaction: "98%".into(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_is_fully_populated() {
        let doc = default_content();
        assert_eq!(doc.services.len(), 4);
        assert_eq!(doc.reviews.len(), 3);
        assert_eq!(doc.blog_posts.len(), 2);
        assert_eq!(doc.portfolio_images.len(), 3);
        assert!(!doc.hero.title.is_empty());
        assert!(!doc.about.description.is_empty());
        assert!(!doc.contacts.email.is_empty());
    }

    #[test]
    fn default_ids_are_unique_per_list() {
        let doc = default_content();
        let mut ids: Vec<_> = doc.services.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), doc.services.len());
    }
}
