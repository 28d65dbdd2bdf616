use crate::domain::listing::Testimonial;

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "t1",
        title: "Exceptional Service!",
        message: "Our experience with Estatein was outstanding. Their team's dedication and professionalism made finding our dream home a breeze. Highly recommended!",
        name: "Wade Warren",
        location: "USA, California",
        avatar_src: "/static/avatars/avatar.png",
        rating: 5,
    },
    Testimonial {
        id: "t2",
        title: "Efficient and Reliable",
        message: "Estatein provided us with top-notch service. They helped us sell our property quickly and at a great price. We couldn't be happier with the results.",
        name: "Emelie Thomson",
        location: "USA, Florida",
        avatar_src: "/static/avatars/avatar2.png",
        rating: 5,
    },
    Testimonial {
        id: "t3",
        title: "Trusted Advisors",
        message: "The Estatein team guided us through the entire buying process. Their knowledge and commitment to our needs were impressive. Thank you for your support!",
        name: "John Mans",
        location: "USA, Nevada",
        avatar_src: "/static/avatars/avatar3.png",
        rating: 5,
    },
    Testimonial {
        id: "t4",
        title: "Smooth Experience",
        message: "Everything was seamless from start to finish. Communication was clear and the team was always ready to help.",
        name: "Jane Cooper",
        location: "USA, New York",
        avatar_src: "/static/avatars/avatar.png",
        rating: 5,
    },
];
