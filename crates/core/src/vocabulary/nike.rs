use cargas_domain::StatusCategory::{self, Completed, InTransit, Issuance, Pending, Review};

pub(super) static STATUS_CODES: &[(i64, &str, StatusCategory)] = &[
    // Emissao
    (10, "MINUTA EMITIDA", Issuance),
    (69, "MINUTA NÃO EMITIDA", Issuance),
    (100, "AGUARDANDO COLETA", Issuance),
    (403, "COLETA NÃO REALIZADA", Issuance),
    (674, "CHEGADA NA ORIGEM", Issuance),
    // Transito
    (3, "SAÍDA PARA ENTREGA", InTransit),
    (4, "CHEGADA NO DESTINO", InTransit),
    (9, "TRANSFERÊNCIA REALIZADA", InTransit),
    (11, "COLETA REALIZADA", InTransit),
    (17, "COLETA CONFIRMADA", InTransit),
    (23, "EM ROTA DE TRANSBORDO", InTransit),
    (25, "EM ROTA DE ENTREGA", InTransit),
    (28, "ENTREGA/COLETA AGENDADA", InTransit),
    (72, "CHEGADA NA FILIAL DESTINO", InTransit),
    (75, "RETIRADO PELO CLIENTE", InTransit),
    (76, "ENTREGA INTERNA/REDESPACHO", InTransit),
    (103, "CARGA EM VIAGEM DESTINO", InTransit),
    (131, "SAIU PARA ENTREGA INTERNA", InTransit),
    (165, "SAIU DA FILIAL ORIGEM", InTransit),
    (511, "EM ROTA DE TRANSBORDO CROSS", InTransit),
    (675, "CHEGADA NO TRANSBORDO", InTransit),
    (676, "SAÍDA DO TRANSBORDO", InTransit),
    // Finalizada
    (1, "ENTREGA REALIZADA", Completed),
    (5, "DEVOLUÇÃO/RETORNO FILIAL ORIGEM", Completed),
    (24, "SINISTRO", Completed),
    (27, "DEVOLVIDA/RETORNO", Completed),
    (80, "ENTREGA REALIZADA AO FAVORECIDO", Completed),
    (105, "CANCELAMENTO", Completed),
    (109, "DESTRUÍDA", Completed),
    (170, "COLETA CANCELADA", Completed),
    (174, "DEVOLUÇÃO REALIZADA", Completed),
    // PENDENCIA
    (6, "ENTREGA NÃO REALIZADA", Pending),
    (7, "DESTINATÁRIO RECUSOU RECEBER", Pending),
    (8, "AGUARDANDO RETIRADA", Pending),
    (12, "MERCADORIA RETIDA", Pending),
    (13, "AGUARDANDO PAGAMENTO", Pending),
    (14, "DADOS DIVERGENTES", Pending),
    (16, "MERCADORIA ROUBADA", Pending),
    (18, "ROUBO DE CARGA", Pending),
    (20, "EXTRAVIO DE CARGA", Pending),
    (30, "AGUARDANDO LIBERAÇÃO FISCAL", Pending),
    (48, "AGUARDANDO REENTREGA", Pending),
    (67, "DESTINATÁRIO AUSENTE", Pending),
    (74, "ENDEREÇO INCORRETO", Pending),
    (82, "RECUSADO PELO CLIENTE FINAL", Pending),
    (127, "RETORNO A CD", Pending),
    (135, "CLIENTE NÃO LOCALIZADO", Pending),
    (136, "FORA DA ROTA", Pending),
    (277, "REAGENDAMENTO SOLICITADO", Pending),
    (677, "PENDÊNCIA DOCUMENTAÇÃO", Pending),
    // Conferencia
    (33, "CONFERENCIA DE CARGA", Review),
    (422, "REMETENTE CANCELOU A COLETA", Review),
    (423, "CHEGADA NO PARCEIRO CD", Review),
    (667, "SEPARAÇÃO DE VOLUMES", Review),
    (669, "AGUARDANDO DOCUMENTAÇÃO", Review),
    (672, "EXCESSO DE PESO", Review),
];
