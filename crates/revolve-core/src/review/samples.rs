use super::models::ReviewItem;

/// Built-in testimonials shown when no reviews file is configured
pub fn sample_reviews() -> Vec<ReviewItem> {
    vec![
        ReviewItem::new(
            "Sarah Chen",
            "TechStart Inc.",
            5,
            "The AI agents transformed our customer service. Response times dropped by 80% while customer satisfaction rose sharply.",
        ),
        ReviewItem::new(
            "Michael Rodriguez",
            "DataFlow Solutions",
            5,
            "These agents helped us uncover insights in our data we did not know existed. The ROI was clear within the first month.",
        ),
        ReviewItem::new(
            "Emily Johnson",
            "Creative Agency Pro",
            5,
            "Our agents revolutionised our content process. We now produce 3x more content with consistent quality.",
        ),
        ReviewItem::new(
            "David van der Berg",
            "InnovateTech B.V.",
            5,
            "Eva completely transformed our internal knowledge base. Staff find the information they need within seconds.",
        ),
        ReviewItem::new(
            "Lisa Janssen",
            "Marketing Masters",
            5,
            "Mark took our marketing team to the next level. The consistency of our brand voice and the speed of our campaign launches is phenomenal.",
        ),
        ReviewItem::new(
            "Thomas Bakker",
            "FinanceFlow",
            5,
            "Ingrid runs our mailbox so efficiently that we spend 70% less time on email. Our focus is now fully on strategic work.",
        ),
        ReviewItem::new(
            "Anna Vermeulen",
            "HealthTech Solutions",
            5,
            "The rollout was seamless and the results exceeded our expectations. Our AI agent fully optimised our workflow.",
        ),
        ReviewItem::new(
            "Robert de Wit",
            "E-commerce Plus",
            5,
            "Our customer service is now available around the clock without extra staff. Customer satisfaction rose by 45%.",
        ),
        ReviewItem::new(
            "Sophie Mulder",
            "Design Studio Amsterdam",
            5,
            "Daniel revolutionised our design process. Complex visual projects now take a fraction of the time.",
        ),
        ReviewItem::new(
            "Mark Hendriks",
            "Logistics Pro",
            5,
            "The automation our agents brought cut operating costs by 35% while service quality improved.",
        ),
        ReviewItem::new(
            "Jennifer Smit",
            "HR Innovations",
            5,
            "Eva answers every HR question from our staff directly and accurately. It took a huge load off our HR department.",
        ),
        ReviewItem::new(
            "Peter Groot",
            "Tech Consultancy",
            5,
            "Integration with our existing systems went flawlessly. The agents work with every tool we already used.",
        ),
    ]
}
