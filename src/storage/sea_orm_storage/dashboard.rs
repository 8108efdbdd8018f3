        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

T        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

Z        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

O        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

T        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

j        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

T        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

T        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

P        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

T        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

Q        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

F        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

O        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

/        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

/        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

/        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

后        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

台        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

统        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

计        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

，        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

决        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

定        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

“        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

本        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

年        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

证        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

书        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

”        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

的        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

范        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

围        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

（        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

T        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

）        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

&        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

3        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

2        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

-        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

>        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

<        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

>        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

q        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

&        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

j        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

统        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

计        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

学        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

员        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

失        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

败        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

?        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

T        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

j        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

统        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

计        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

教        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

师        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

失        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

败        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

?        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

A        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

j        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

统        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

计        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

管        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

理        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

员        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

失        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

败        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

?        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

T        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

&        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

j        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

统        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

计        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

队        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

伍        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

失        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

败        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

?        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

&        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

j        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

统        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

计        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

考        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

试        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

成        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

绩        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

失        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

败        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

?        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

P        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

q        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

&        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

j        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

统        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

计        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

考        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

试        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

成        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

绩        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

失        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

败        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

?        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

&        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

j        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

统        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

计        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

证        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

书        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

失        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

败        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

?        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

1        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

1        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

k        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

j        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

v        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

I        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

v        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

?        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

+        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

1        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

1        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

1        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

k        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

j        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

v        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

I        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

v        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

?        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

I        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

A        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

I        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

A        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

&        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

|        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

j        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

统        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

计        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

证        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

书        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

失        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

败        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

?        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

O        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

k        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

6        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

4        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

6        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

4        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

6        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

4        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

6        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

4        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

6        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

4        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

6        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

4        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

D        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

6        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

4        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

6        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

4        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

6        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

4        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

6        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

4        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

#        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

[        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

]        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

T        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

Z        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

B        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

N        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

q        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

I        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

#        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

[        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

k        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

]        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

2        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

2        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

5        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

q        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

q        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

#        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

[        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

k        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

]        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

A        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

N        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

A        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

@        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

N        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

N        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

S        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

I        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

@        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

N        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

T        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

I        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

B        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

V        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

F        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

V        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

v        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

[        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

]        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

q        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

5        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

7        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

v        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

[        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

2        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

2        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

4        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

2        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

2        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

5        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

2        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

2        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

5        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

]        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

N        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

{        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

N        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

B        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

V        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

N        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

x        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

C        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

E        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

R        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

T        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

"        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

:        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

U        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

6        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

1        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

=        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

g        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

b        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

m        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

2        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

0        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

2        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

5        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

w        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

p        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

q        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

u        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

d        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

n        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

1        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

q        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

1        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

q        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

o        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

l        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

3        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

q        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

!        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

(        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

.        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

f        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

c        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

t        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

h        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

i        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

s        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

_        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

y        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

e        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

a        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

r        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

,        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

2        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

)        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

;        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

         // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

}        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }


        // 每张证书对应不同的考试配置
        for (year, belt) in [(2024, Belt::Amarela), (2025, Belt::Laranja), (2025, Belt::Verde)] {
            let config = storage
                .create_exam_config_impl(ExamConfigInput {
                    belt,
                    title: format!("Exame Faixa {belt}"),
                    topics: vec![],
                    question_count: 5,
                    pass_percentage: 70,
                    active: true,
                })
                .await
                .unwrap();
            storage
                .issue_certificate_impl(NewCertificate {
                    user_id: student.id,
                    exam_config_id: config.id,
                    exam_result_id: None,
                    belt,
                    issued_by: None,
                    code_prefix: "CERT".to_string(),
                    issued_at: chrono::Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

